use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_page(page: i64) -> Result<(), AppError> {
        if page < 1 {
            return Err(AppError::InvalidInput(
                "Page number must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
