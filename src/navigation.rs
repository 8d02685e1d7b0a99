//! 侧边栏导航
//!
//! 按用户角色过滤导航项、计算当前激活项并生成未读通知角标。
//! 所有函数都是纯函数，HTTP 层只负责提供当前用户、未读数和路径。

use crate::models::navigation::responses::{NavEntry, NavUser, NavigationResponse};
use crate::models::users::entities::{User, UserRole};

/// 导航项角标来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBadge {
    None,
    UnreadNotifications,
}

/// 静态导航项定义
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    /// `None` 表示所有角色可见
    pub roles: Option<&'static [UserRole]>,
    pub badge: NavBadge,
}

const STAFF_ROLES: &[UserRole] = &[UserRole::Agent, UserRole::Admin];
const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        href: "/",
        icon: "home",
        roles: None,
        badge: NavBadge::None,
    },
    NavItem {
        label: "Tickets",
        href: "/tickets",
        icon: "ticket",
        roles: None,
        badge: NavBadge::None,
    },
    NavItem {
        label: "Notifications",
        href: "/notifications",
        icon: "bell",
        roles: None,
        badge: NavBadge::UnreadNotifications,
    },
    NavItem {
        label: "Knowledge Base",
        href: "/knowledge-base",
        icon: "book-open",
        roles: None,
        badge: NavBadge::None,
    },
    NavItem {
        label: "AI Assistant",
        href: "/ai-assistant",
        icon: "bot",
        roles: None,
        badge: NavBadge::None,
    },
    NavItem {
        label: "Departments",
        href: "/departments",
        icon: "building",
        roles: Some(STAFF_ROLES),
        badge: NavBadge::None,
    },
    NavItem {
        label: "Reports",
        href: "/reports",
        icon: "bar-chart",
        roles: Some(STAFF_ROLES),
        badge: NavBadge::None,
    },
    NavItem {
        label: "Users",
        href: "/users",
        icon: "users",
        roles: Some(ADMIN_ONLY),
        badge: NavBadge::None,
    },
    NavItem {
        label: "Settings",
        href: "/settings",
        icon: "settings",
        roles: Some(ADMIN_ONLY),
        badge: NavBadge::None,
    },
];

impl NavItem {
    pub fn visible_to(&self, role: &UserRole) -> bool {
        self.roles.is_none_or(|roles| roles.contains(role))
    }
}

/// 当前角色可见的导航项，未登录时按 EMPLOYEE 处理，保持原有顺序
pub fn visible_items(role: Option<&UserRole>) -> Vec<&'static NavItem> {
    let role = role.unwrap_or(&UserRole::Employee);
    NAV_ITEMS.iter().filter(|item| item.visible_to(role)).collect()
}

/// 当前路径是否命中导航项；根路径只做精确匹配
pub fn is_active(current_path: &str, href: &str) -> bool {
    if current_path == href {
        return true;
    }
    href != "/"
        && current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// 角标文本，数量不大于 0 时不显示
pub fn badge_label(count: i64) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

pub fn build_navigation(
    user: Option<&User>,
    unread_count: i64,
    current_path: &str,
) -> NavigationResponse {
    let items = visible_items(user.map(|u| &u.role))
        .into_iter()
        .map(|item| NavEntry {
            label: item.label.to_string(),
            href: item.href.to_string(),
            icon: item.icon.to_string(),
            active: is_active(current_path, item.href),
            badge: match item.badge {
                NavBadge::UnreadNotifications => badge_label(unread_count),
                NavBadge::None => None,
            },
        })
        .collect();

    NavigationResponse {
        user: user.map(|u| NavUser {
            name: u.name.clone(),
            role: u.role.clone(),
        }),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: UserRole) -> User {
        User {
            id: 1,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            role,
            department_id: None,
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn hrefs(items: &[&NavItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.href).collect()
    }

    #[test]
    fn test_employee_sees_unrestricted_items_only() {
        let items = visible_items(Some(&UserRole::Employee));
        assert_eq!(
            hrefs(&items),
            vec![
                "/",
                "/tickets",
                "/notifications",
                "/knowledge-base",
                "/ai-assistant"
            ]
        );
    }

    #[test]
    fn test_agent_sees_staff_items() {
        let items = hrefs(&visible_items(Some(&UserRole::Agent)));
        assert!(items.contains(&"/departments"));
        assert!(items.contains(&"/reports"));
        assert!(!items.contains(&"/users"));
        assert!(!items.contains(&"/settings"));
    }

    #[test]
    fn test_admin_sees_everything_in_order() {
        let items = visible_items(Some(&UserRole::Admin));
        assert_eq!(items.len(), NAV_ITEMS.len());
        assert_eq!(
            hrefs(&items),
            NAV_ITEMS.iter().map(|item| item.href).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_missing_role_defaults_to_employee() {
        assert_eq!(
            hrefs(&visible_items(None)),
            hrefs(&visible_items(Some(&UserRole::Employee)))
        );
    }

    #[test]
    fn test_active_matching() {
        assert!(is_active("/tickets", "/tickets"));
        assert!(is_active("/tickets/123", "/tickets"));
        assert!(!is_active("/tickets/123", "/"));
        assert!(is_active("/", "/"));
        assert!(!is_active("/ticketsarchive", "/tickets"));
        assert!(!is_active("/tick", "/tickets"));
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(-1), None);
        assert_eq!(badge_label(5), Some("5".to_string()));
    }

    #[test]
    fn test_build_navigation_for_employee() {
        let user = user_with_role(UserRole::Employee);
        let nav = build_navigation(Some(&user), 5, "/tickets/42");

        let nav_user = nav.user.expect("user should be present");
        assert_eq!(nav_user.name, "Jane Doe");
        assert_eq!(nav_user.role, UserRole::Employee);

        let active: Vec<_> = nav.items.iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "/tickets");

        let notifications = nav
            .items
            .iter()
            .find(|e| e.href == "/notifications")
            .unwrap();
        assert_eq!(notifications.badge.as_deref(), Some("5"));
        assert!(nav.items.iter().all(|e| e.href != "/departments"));
    }

    #[test]
    fn test_build_navigation_without_unread() {
        let user = user_with_role(UserRole::Admin);
        let nav = build_navigation(Some(&user), 0, "/");
        assert!(nav.items.iter().all(|e| e.badge.is_none()));
        assert!(nav.items.iter().find(|e| e.href == "/").unwrap().active);
        assert!(nav.items.iter().any(|e| e.href == "/settings"));
    }
}
