//! Net proceeds calculations for a property sale.
//!
//! The worksheet derives the result record from the seller's inputs; the
//! audit sheet and the ratio helpers present the same numbers for display.

pub mod audit;
pub mod common;
pub mod ratios;
pub mod worksheets;

pub use audit::{AuditLine, AuditSection, AuditSheet};
pub use ratios::SaleRatios;
pub use worksheets::{NetProceedsWorksheet, SaleLineItems, compute};
