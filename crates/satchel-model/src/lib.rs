pub mod due;
pub mod error;
pub mod record;
pub mod urgency;

pub use due::{DUE_DATE_FORMAT, DueDate};
pub use error::{ModelError, Result};
pub use record::{AssignmentRecord, RESERVED_CHARACTERS, RecordId, check_field};
pub use urgency::{UPCOMING_MAX_DAYS, URGENT_MAX_DAYS, Urgency};
