//! 路径参数安全提取器
//!
//! 非数字或非正数的 ID 在进入处理函数之前就以 400 返回。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: String) -> actix_web::Error {
    InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 从路径中解析正整数 ID
pub fn parse_safe_i64(req: &HttpRequest, param: &str) -> Result<i64, actix_web::Error> {
    let raw = req
        .match_info()
        .get(param)
        .ok_or_else(|| bad_request(format!("Missing path parameter: {param}")))?;

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(bad_request(format!("Invalid {param}: must be a positive integer"))),
    }
}

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_safe_i64(req, $param).map($name))
            }
        }
    };
}

define_safe_i64_extractor!(SafeDepartmentIdI64, "id");
define_safe_i64_extractor!(SafeNotificationIdI64, "id");
