pub mod calculations;
pub mod models;

pub use calculations::{
    AuditLine, AuditSection, AuditSheet, NetProceedsWorksheet, SaleLineItems, SaleRatios, compute,
};
pub use models::*;
