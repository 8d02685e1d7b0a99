//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_helpdesk_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum HelpdeskError {
            $($variant(String),)*
        }

        impl HelpdeskError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(HelpdeskError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(HelpdeskError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(HelpdeskError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl HelpdeskError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        HelpdeskError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_helpdesk_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Conflict("E008", "Resource Conflict"),
    Serialization("E009", "Serialization Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    Io("E012", "IO Error"),
}

impl HelpdeskError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for HelpdeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for HelpdeskError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for HelpdeskError {
    fn from(err: sea_orm::DbErr) -> Self {
        HelpdeskError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for HelpdeskError {
    fn from(err: std::io::Error) -> Self {
        HelpdeskError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HelpdeskError {
    fn from(err: serde_json::Error) -> Self {
        HelpdeskError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HelpdeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(HelpdeskError::cache_connection("test").code(), "E001");
        assert_eq!(HelpdeskError::database_config("test").code(), "E003");
        assert_eq!(HelpdeskError::validation("test").code(), "E006");
        assert_eq!(HelpdeskError::conflict("test").code(), "E008");
        assert_eq!(HelpdeskError::authorization("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            HelpdeskError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            HelpdeskError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = HelpdeskError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = HelpdeskError::not_found("Department 7");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Department 7"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "socket busy");
        let err: HelpdeskError = io.into();
        assert_eq!(err.code(), "E012");
        assert_eq!(err.to_string(), "IO Error: socket busy");
    }
}
