//! # EduFlow Models
//!
//! Data-transfer types handed between the API layer and the screens.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed identifiers
//! - [`users`]: the signed-in user, login and profile DTOs
//! - [`academics`]: attendance and marks with their derived metrics
//! - [`notifications`]: role-targeted notifications

pub mod academics;
pub mod ids;
pub mod notifications;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use academics::{
    AttendanceRecord, AttendanceStatus, BadgeVariant, Grade, MarkRecord, format_percentage, gpa,
    overall_attendance, truncate,
};
pub use ids::{NotificationId, UserId};
pub use notifications::{Notification, NotificationKind, unread_count};
pub use users::{LoginRequest, UpdateProfileDto, User};
