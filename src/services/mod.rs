pub mod departments;
pub mod navigation;
pub mod notifications;
pub mod system;

pub use departments::DepartmentService;
pub use navigation::NavigationService;
pub use notifications::NotificationService;
pub use system::SystemService;
