use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Employee, // 普通员工
    Agent,    // 客服人员
    Admin,    // 管理员
}

impl UserRole {
    pub const EMPLOYEE: &'static str = "EMPLOYEE";
    pub const AGENT: &'static str = "AGENT";
    pub const ADMIN: &'static str = "ADMIN";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn agent_roles() -> &'static [&'static UserRole] {
        &[&Self::Agent, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Employee, &Self::Agent, &Self::Admin]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => Self::EMPLOYEE,
            UserRole::Agent => Self::AGENT,
            UserRole::Admin => Self::ADMIN,
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid user role: '{s}'. supported roles: EMPLOYEE, AGENT, ADMIN"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            Self::EMPLOYEE => Ok(UserRole::Employee),
            Self::AGENT => Ok(UserRole::Agent),
            Self::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department_id: Option<i64>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("Agent".parse::<UserRole>(), Ok(UserRole::Agent));
        assert_eq!("EMPLOYEE".parse::<UserRole>(), Ok(UserRole::Employee));
        assert!("teacher".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Agent).unwrap(),
            "\"AGENT\""
        );
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_role_sets() {
        assert!(UserRole::agent_roles().contains(&&UserRole::Admin));
        assert!(!UserRole::agent_roles().contains(&&UserRole::Employee));
        assert_eq!(UserRole::all_roles().len(), 3);
    }
}
