use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub size: i64,
}

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
/// 页码上限，保证 (page - 1) * size 不会溢出
pub const MAX_PAGE: i64 = i64::MAX / MAX_PAGE_SIZE;

/// 规范化分页参数：页码 1..=MAX_PAGE，每页 1..=MAX_PAGE_SIZE 条
pub fn normalize_pagination(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
    let page = page.unwrap_or(1).clamp(1, MAX_PAGE);
    let size = size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (page as u64, size as u64)
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

/// 可选布尔值的反序列化，兼容查询字符串中的 "true"/"false"/"1"/"0"
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct OptionalBoolVisitor;

    impl<'de> Visitor<'de> for OptionalBoolVisitor {
        type Value = Option<bool>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or a string containing a boolean")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(Some(value))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            match value.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Some(true)),
                "false" | "0" => Ok(Some(false)),
                "" => Ok(None),
                _ => Err(Error::invalid_value(Unexpected::Str(value), &self)),
            }
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(OptionalBoolVisitor)
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Filtered {
        #[serde(flatten)]
        pagination: PaginationQuery,
        #[serde(default, deserialize_with = "deserialize_optional_bool")]
        is_read: Option<bool>,
    }

    #[test]
    fn test_query_string_values_are_parsed() {
        let parsed: Filtered = serde_json::from_value(serde_json::json!({
            "page": "3",
            "size": "25",
            "is_read": "false"
        }))
        .unwrap();
        assert_eq!(parsed.pagination.page, 3);
        assert_eq!(parsed.pagination.size, 25);
        assert_eq!(parsed.is_read, Some(false));
    }

    #[test]
    fn test_defaults_when_missing() {
        let parsed: Filtered = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(parsed.pagination.page, 1);
        assert_eq!(parsed.pagination.size, 10);
        assert_eq!(parsed.is_read, None);
    }

    #[test]
    fn test_normalize_pagination_clamps() {
        assert_eq!(normalize_pagination(Some(0), Some(1000)), (1, 100));
        assert_eq!(normalize_pagination(Some(4), Some(-5)), (4, 1));
    }

    #[test]
    fn test_huge_page_offset_fits() {
        let (page, size) = normalize_pagination(Some(i64::MAX), Some(i64::MAX));
        assert_eq!(page, MAX_PAGE as u64);
        assert_eq!(size, MAX_PAGE_SIZE as u64);
        assert!((page - 1).checked_mul(size).is_some_and(|o| o <= i64::MAX as u64));
        assert_eq!(normalize_pagination(None, None), (1, 10));
    }
}
