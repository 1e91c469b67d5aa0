pub mod time_options;
pub mod url_validator;

pub use time_options::TimeOfDay;
