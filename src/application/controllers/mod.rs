//! Screen controllers.

mod add_contact;
mod contact_list;

pub use add_contact::AddContactController;
pub use contact_list::{ContactListController, ContactRow, ContactRows};
