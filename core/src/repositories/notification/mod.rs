pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
mod memory;


pub use memory::InMemoryNotificationRepository;
pub use r#trait::NotificationRepository;
