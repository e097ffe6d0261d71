use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Primary key taken from the `:id` path segment. Anything that is not a
/// non-negative integer names no record and is rejected with a JSON 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordId {
    Id(i64),
    /// A non-negative integer too large for any stored key.
    OutOfRange,
}

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("Not found"))?;
        parse_record_id(&raw).ok_or_else(|| ApiError::not_found("Not found"))
    }
}

pub fn parse_record_id(raw: &str) -> Option<RecordId> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse::<i64>().map_or(RecordId::OutOfRange, RecordId::Id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_non_digits() {
        assert_eq!(parse_record_id(""), None);
        assert_eq!(parse_record_id("-1"), None);
        assert_eq!(parse_record_id("+1"), None);
        assert_eq!(parse_record_id("1.0"), None);
        assert_eq!(parse_record_id("abc"), None);
        assert_eq!(parse_record_id(" 1"), None);
    }

    #[test]
    fn accepts_leading_zeros() {
        assert_eq!(parse_record_id("0"), Some(RecordId::Id(0)));
        assert_eq!(parse_record_id("007"), Some(RecordId::Id(7)));
    }

    #[test]
    fn oversized_integer_is_out_of_range() {
        assert_eq!(
            parse_record_id("99999999999999999999"),
            Some(RecordId::OutOfRange)
        );
        assert_eq!(
            parse_record_id("9223372036854775808"),
            Some(RecordId::OutOfRange)
        );
        assert_eq!(
            parse_record_id("9223372036854775807"),
            Some(RecordId::Id(i64::MAX))
        );
    }

    proptest! {
        #[test]
        fn parses_every_non_negative_i64(id in 0i64..=i64::MAX) {
            prop_assert_eq!(parse_record_id(&id.to_string()), Some(RecordId::Id(id)));
        }

        #[test]
        fn rejects_negative_numbers(id in i64::MIN..0i64) {
            prop_assert_eq!(parse_record_id(&id.to_string()), None);
        }
    }
}
