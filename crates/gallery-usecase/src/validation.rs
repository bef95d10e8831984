//! Input checks shared by the services

use gallery_domain::ValidationError;

/// Trim `value` and require 1..=`max` characters
pub(crate) fn required_text<'a>(
    field: &'static str,
    value: &'a str,
    max: usize,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed)
}

pub(crate) fn positive_id(field: &'static str, id: i64) -> Result<i64, ValidationError> {
    if id <= 0 {
        return Err(ValidationError::NonPositive { field, value: id });
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_before_checking() {
        assert_eq!(required_text("name", "  ok  ", 2), Ok("ok"));
        assert_eq!(
            required_text("name", " \t\n", 10),
            Err(ValidationError::Empty { field: "name" })
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 4 characters, 12 bytes
        assert!(required_text("title", "美術館展", 4).is_ok());
        assert_eq!(
            required_text("title", "美術館展示", 4),
            Err(ValidationError::TooLong { field: "title", max: 4 })
        );
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(positive_id("museum id", 1), Ok(1));
        assert!(positive_id("museum id", 0).is_err());
        assert!(positive_id("museum id", -3).is_err());
    }
}
