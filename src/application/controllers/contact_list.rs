//! Contact list screen controller.

use std::sync::Arc;

use tracing::debug;

use crate::application::store::{ContactStore, StoreSubscription};
use crate::domain::ScreenId;
use crate::domain::entities::Contact;
use crate::domain::ports::NavigationPort;

/// Display data for one list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRow<'a> {
    pub name: &'a str,
    pub address: &'a str,
}

/// Snapshot of the store prepared for display.
///
/// Rows are produced lazily and `iter` can be called any number of times.
#[derive(Debug, Clone, Default)]
pub struct ContactRows {
    contacts: Vec<Contact>,
}

impl ContactRows {
    pub fn iter(&self) -> impl Iterator<Item = ContactRow<'_>> + Clone {
        self.contacts.iter().map(|c| ContactRow {
            name: c.name(),
            address: c.address(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Presents the store and opens the add-contact flow.
pub struct ContactListController {
    store: ContactStore,
    navigation: Arc<dyn NavigationPort>,
    subscription: StoreSubscription,
}

impl ContactListController {
    #[must_use]
    pub fn new(store: ContactStore, navigation: Arc<dyn NavigationPort>) -> Self {
        let subscription = store.subscribe();
        Self {
            store,
            navigation,
            subscription,
        }
    }

    /// Returns one row per contact, in store order.
    #[must_use]
    pub fn render(&self) -> ContactRows {
        ContactRows {
            contacts: self.store.list(),
        }
    }

    pub fn on_add_requested(&self) {
        debug!("Add contact requested");
        self.navigation.navigate_to(ScreenId::AddContact);
    }

    /// Returns whether the store changed since the last acknowledgement.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.subscription.has_changed()
    }

    pub fn acknowledge_changes(&mut self) {
        self.subscription.acknowledge();
    }
}
