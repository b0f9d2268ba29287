mod navigation_port;
mod notification_port;

pub use navigation_port::NavigationPort;
pub use notification_port::NotificationPort;
