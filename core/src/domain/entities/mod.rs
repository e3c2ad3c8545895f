//! Domain entities representing core business objects.

pub mod activity;
pub mod identity;
pub mod notification;
pub mod user;

// Re-export commonly used types
pub use activity::{Activity, ActivityChanges, ActivityWithCreator};
pub use identity::IdentityClaims;
pub use notification::{Notification, NotificationWithRecipient};
pub use user::{Role, User, UserContact, UserSummary};
