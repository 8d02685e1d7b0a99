/// 业务错误码，随响应信封中的 `code` 字段返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    RouteNotFound = 1005,
    Conflict = 1009,
    InternalServerError = 1500,

    // 部门
    DepartmentNotFound = 2000,
    DepartmentInvalid = 2001,
    DepartmentAlreadyExists = 2002,
    DepartmentNotEmpty = 2003,
    DepartmentCreationFailed = 2004,
    DepartmentUpdateFailed = 2005,
    DepartmentDeleteFailed = 2006,

    // 通知
    NotificationNotFound = 3000,
    NotificationInvalid = 3001,
    NotificationCreationFailed = 3002,

    // 用户
    UserNotFound = 4000,
    UserInactive = 4001,
}
