//! Local argument checks run before any request is sent.

use crate::error::Error;

/// API maximum for the SMS unsubscribe page size.
pub const MAX_SMS_PAGE_SIZE: u32 = 1000;

pub(crate) fn require_id(value: u64, name: &str) -> Result<(), Error> {
    if value == 0 {
        return Err(Error::Validation(format!("{name} is required")));
    }
    Ok(())
}

pub(crate) fn require_text(value: &str, name: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{name} is required")));
    }
    Ok(())
}

pub(crate) fn require_items<T>(items: &[T], name: &str) -> Result<(), Error> {
    if items.is_empty() {
        return Err(Error::Validation(format!("{name} cannot be empty")));
    }
    Ok(())
}

/// Reject a zero page size and cap anything above `max`.
pub fn clamp_page_size(limit: u32, max: u32) -> Result<u32, Error> {
    if limit == 0 {
        return Err(Error::Validation("limit must be > 0".to_string()));
    }
    Ok(limit.min(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id() {
        assert!(require_id(1, "listid").is_ok());
        assert_eq!(
            require_id(0, "listid").unwrap_err().to_string(),
            "listid is required"
        );
    }

    #[test]
    fn test_require_text_rejects_blank() {
        assert!(require_text("Newsletter", "name").is_ok());
        assert!(require_text("   ", "name").is_err());
    }

    #[test]
    fn test_clamp_page_size() {
        assert_eq!(clamp_page_size(5000, MAX_SMS_PAGE_SIZE).unwrap(), 1000);
        assert_eq!(clamp_page_size(1000, MAX_SMS_PAGE_SIZE).unwrap(), 1000);
        assert_eq!(clamp_page_size(1, MAX_SMS_PAGE_SIZE).unwrap(), 1);
        assert!(matches!(
            clamp_page_size(0, MAX_SMS_PAGE_SIZE),
            Err(Error::Validation(_))
        ));
    }
}
