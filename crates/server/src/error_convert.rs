use shared_types::AppError;

use crate::compliance::CalendarError;

/// Convert a date parsing failure into a 400 naming the offending field.
pub fn calendar_to_app_error(field: &str, err: CalendarError) -> AppError {
    match err {
        CalendarError::InvalidDateFormat(_) => {
            AppError::bad_request(err.to_string()).with_field(field, "Expected a YYYY-MM-DD date")
        }
    }
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

/// Extension trait providing `.for_field("start_date")` on date parse results.
pub trait CalendarResultExt<T> {
    fn for_field(self, field: &str) -> Result<T, AppError>;
}

impl<T> CalendarResultExt<T> for Result<T, CalendarError> {
    fn for_field(self, field: &str) -> Result<T, AppError> {
        self.map_err(|e| calendar_to_app_error(field, e))
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
