//! Worksheet implementations.
//!
//! Each worksheet turns one input record into one result record.

pub mod net_proceeds;

pub use net_proceeds::{NetProceedsWorksheet, SaleLineItems, compute};
