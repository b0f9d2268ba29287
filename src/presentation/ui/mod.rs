//! UI screens.

mod add_contact_screen;
mod app;
mod contact_list_screen;
mod notification_popup;

pub use add_contact_screen::{AddContactScreen, FormAction};
pub use app::App;
pub use contact_list_screen::{ContactListScreen, ListAction};
pub use notification_popup::NotificationPopup;
