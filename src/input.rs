use std::{error::Error, fmt};

pub const MAX_FRAMES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputError(String);

impl InvalidInputError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl Error for InvalidInputError {}

/// Parses a comma-separated reference string and checks the frame count
/// bounds. Order and duplicates are preserved.
pub fn validate(raw: &str, frame_count: usize) -> Result<Vec<i64>, InvalidInputError> {
    if frame_count == 0 {
        return Err(InvalidInputError::new("frame count must be at least 1"));
    }
    if frame_count > MAX_FRAMES {
        return Err(InvalidInputError::new(format!(
            "frame count must be at most {MAX_FRAMES}"
        )));
    }
    if raw.trim().is_empty() {
        return Err(InvalidInputError::new("reference string is empty"));
    }
    let mut pages = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        let page = token.parse::<i64>().map_err(|_| {
            InvalidInputError::new(format!("'{token}' is not a valid page number"))
        })?;
        pages.push(page);
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_tokens() {
        let pages = validate(" 1 , 2,3 , 4", 3).unwrap();
        assert_eq!(pages, vec![1, 2, 3, 4]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let pages = validate("5,1,5,5,2", 3).unwrap();
        assert_eq!(pages, vec![5, 1, 5, 5, 2]);
    }

    #[test]
    fn accepts_negative_pages() {
        let pages = validate("-1,0,2", 2).unwrap();
        assert_eq!(pages, vec![-1, 0, 2]);
    }

    #[test]
    fn rejects_non_numeric_token() {
        assert!(validate("1,2,a,4", 3).is_err());
    }

    #[test]
    fn rejects_empty_string() {
        assert!(validate("", 3).is_err());
        assert!(validate("   ", 3).is_err());
    }

    #[test]
    fn rejects_missing_token() {
        assert!(validate("1,,2", 3).is_err());
    }

    #[test]
    fn enforces_frame_count_bounds() {
        assert!(validate("1,2,3", 0).is_err());
        assert!(validate("1,2,3", 11).is_err());
        assert!(validate("1,2,3", 1).is_ok());
        assert!(validate("1,2,3", MAX_FRAMES).is_ok());
    }
}
