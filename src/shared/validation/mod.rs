use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::shared::errors::AppError;

/// Accumulates field-level validation failures so a single response can
/// report every invalid field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Merge another set of failures into this one
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    /// Empty set becomes `Ok(())`, anything else a validation error
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_converts_to_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn collects_multiple_messages_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "must not be empty");
        errors.add("title", "must be at most 255 characters");

        assert_eq!(errors.field("title").map(<[String]>::len), Some(2));
        assert!(errors.field("author").is_none());
    }

    #[test]
    fn merge_combines_fields() {
        let mut left = ValidationErrors::new();
        left.add("title", "must not be empty");

        let mut right = ValidationErrors::new();
        right.add("author", "must not be empty");
        right.add("title", "must be at most 255 characters");

        left.merge(right);

        assert_eq!(left.field("title").map(<[String]>::len), Some(2));
        assert_eq!(left.field("author").map(<[String]>::len), Some(1));
    }

    #[test]
    fn serializes_as_plain_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("year", "must be between 0 and 9999");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "year": ["must be between 0 and 9999"] })
        );
    }
}
