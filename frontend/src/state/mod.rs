pub mod attendance;
pub mod fetch;
pub mod notifications;
