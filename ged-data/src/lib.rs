pub mod error;
pub mod mode;
pub mod record;
pub mod year_range;

pub use error::{Result, SchemaError, SelectionError};
pub use mode::Mode;
pub use record::Record;
pub use year_range::YearRange;
