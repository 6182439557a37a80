pub mod enums;
pub mod error;
pub mod procedure;
pub mod report;

pub use enums::{FilterComposition, ProcedureType, TypeFilter};
pub use error::{ModelError, Result};
pub use procedure::ProcedureRecord;
pub use report::ReportCard;
