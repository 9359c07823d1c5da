//! Input checks that run before any downstream call.

use crate::error::{CommentError, CommentResult};
use crate::models::CommentFilter;

/// Longest accepted comment, in characters
pub const MAX_CONTENT_LENGTH: usize = 1000;
pub const DEFAULT_PAGE_SIZE: i32 = 10;
pub const MAX_PAGE_SIZE: i32 = 100;

pub fn validate_content(content: &str) -> CommentResult<()> {
    let length = content.chars().count();
    if length == 0 {
        return Err(CommentError::EmptyContent);
    }
    if length > MAX_CONTENT_LENGTH {
        return Err(CommentError::ContentTooLong {
            length,
            max: MAX_CONTENT_LENGTH,
        });
    }
    Ok(())
}

/// Reject a page below 1 and clamp the page size into `[1, MAX_PAGE_SIZE]`.
///
/// A non-positive page size means "use the default" and is never an error.
pub fn validate_filter(filter: &mut CommentFilter) -> CommentResult<()> {
    if filter.page < 1 {
        return Err(CommentError::InvalidPage(filter.page));
    }

    if filter.page_size < 1 {
        filter.page_size = DEFAULT_PAGE_SIZE;
    } else if filter.page_size > MAX_PAGE_SIZE {
        filter.page_size = MAX_PAGE_SIZE;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_bounds() {
        assert!(matches!(validate_content(""), Err(CommentError::EmptyContent)));
        assert!(validate_content("a").is_ok());
        assert!(validate_content(&"a".repeat(MAX_CONTENT_LENGTH)).is_ok());
        assert!(matches!(
            validate_content(&"a".repeat(MAX_CONTENT_LENGTH + 1)),
            Err(CommentError::ContentTooLong { length: 1001, .. })
        ));
    }

    #[test]
    fn test_content_counts_characters() {
        // 1000 three-byte characters
        assert!(validate_content(&"語".repeat(MAX_CONTENT_LENGTH)).is_ok());
    }

    #[test]
    fn test_page_below_one_is_rejected() {
        for page in [0, -1, i32::MIN] {
            let mut filter = CommentFilter {
                page,
                page_size: 10,
                ..Default::default()
            };
            assert!(matches!(
                validate_filter(&mut filter),
                Err(CommentError::InvalidPage(p)) if p == page
            ));
        }
    }

    #[test]
    fn test_page_size_is_coerced() {
        let cases = [
            (0, DEFAULT_PAGE_SIZE),
            (-5, DEFAULT_PAGE_SIZE),
            (1, 1),
            (50, 50),
            (100, 100),
            (101, MAX_PAGE_SIZE),
            (i32::MAX, MAX_PAGE_SIZE),
        ];
        for (given, expected) in cases {
            let mut filter = CommentFilter {
                page: 1,
                page_size: given,
                ..Default::default()
            };
            validate_filter(&mut filter).unwrap();
            assert_eq!(filter.page_size, expected, "page_size {given}");
        }
    }
}
