pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod sql;
pub mod validate;

pub use extractor::{SafeDepartmentIdI64, SafeNotificationIdI64};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
