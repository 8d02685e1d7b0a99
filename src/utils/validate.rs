use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::departments::requests::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::models::notifications::requests::SendTestNotificationRequest;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

// 部门名称：字母、数字、空格以及常见标点
static DEPARTMENT_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} &'()./_-]*$").expect("Invalid department name regex")
});

pub const DEPARTMENT_NAME_MIN: usize = 2;
pub const DEPARTMENT_NAME_MAX: usize = 100;
pub const DEPARTMENT_DESCRIPTION_MAX: usize = 500;
pub const NOTIFICATION_TITLE_MAX: usize = 200;
pub const NOTIFICATION_MESSAGE_MAX: usize = 1000;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_department_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    // 按字符计数，兼容中文名称
    let len = name.chars().count();
    if !(DEPARTMENT_NAME_MIN..=DEPARTMENT_NAME_MAX).contains(&len) {
        return Err("Department name length must be between 2 and 100 characters");
    }
    if !DEPARTMENT_NAME_RE.is_match(name) {
        return Err("Department name contains invalid characters");
    }
    Ok(())
}

fn validate_department_description(description: &str) -> Result<(), &'static str> {
    if description.chars().count() > DEPARTMENT_DESCRIPTION_MAX {
        return Err("Department description must be at most 500 characters");
    }
    Ok(())
}

pub fn validate_create_department(req: &CreateDepartmentRequest) -> Result<(), &'static str> {
    validate_department_name(&req.name)?;
    if let Some(ref description) = req.description {
        validate_department_description(description)?;
    }
    if let Some(ref email) = req.email {
        validate_email(email)?;
    }
    Ok(())
}

pub fn validate_update_department(req: &UpdateDepartmentRequest) -> Result<(), &'static str> {
    if req.name.is_none()
        && req.description.is_none()
        && req.email.is_none()
        && req.is_active.is_none()
    {
        return Err("At least one field must be provided");
    }
    if let Some(ref name) = req.name {
        validate_department_name(name)?;
    }
    if let Some(ref description) = req.description {
        validate_department_description(description)?;
    }
    if let Some(ref email) = req.email {
        validate_email(email)?;
    }
    Ok(())
}

pub fn validate_test_notification(req: &SendTestNotificationRequest) -> Result<(), &'static str> {
    if let Some(user_id) = req.user_id
        && user_id <= 0
    {
        return Err("user_id must be a positive integer");
    }
    if let Some(ref title) = req.title {
        if title.trim().is_empty() {
            return Err("Title must not be empty");
        }
        if title.chars().count() > NOTIFICATION_TITLE_MAX {
            return Err("Title must be at most 200 characters");
        }
    }
    if let Some(ref message) = req.message {
        if message.trim().is_empty() {
            return Err("Message must not be empty");
        }
        if message.chars().count() > NOTIFICATION_MESSAGE_MAX {
            return Err("Message must be at most 1000 characters");
        }
    }
    Ok(())
}
