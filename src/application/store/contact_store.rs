//! In-memory contact store shared by the screens.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::domain::entities::{Contact, ContactId, NewContact};

/// Contacts present on first launch.
const SEED_CONTACTS: [(&str, &str, &str, &str); 3] = [
    ("natan", "jember", "081389732", "nath@example.com"),
    ("azam", "jakarta", "949104", "reoa@example.com"),
    ("raja", "banten", "892737", "ncaud@example.com"),
];

#[derive(Debug)]
struct Inner {
    contacts: Vec<Contact>,
    next_id: ContactId,
}

/// Ordered, append-only collection of contacts.
///
/// Cloning yields another handle to the same store. The store lives as long as
/// the application session holds a handle to it.
#[derive(Debug, Clone)]
pub struct ContactStore {
    inner: Arc<RwLock<Inner>>,
    revision: Arc<watch::Sender<u64>>,
}

impl ContactStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(Inner {
                contacts: Vec::new(),
                next_id: ContactId(1),
            })),
            revision: Arc::new(revision),
        }
    }

    /// Creates a store holding the three seed contacts, ids 1 to 3.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write();
            for (name, address, phone, email) in SEED_CONTACTS {
                let id = inner.next_id;
                inner
                    .contacts
                    .push(Contact::new(id, name, address, phone, email));
                inner.next_id = id.next();
            }
        }
        debug!(count = SEED_CONTACTS.len(), "Seeded contact store");
        store
    }

    /// Returns a snapshot of all contacts in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Contact> {
        self.inner.read().contacts.clone()
    }

    /// Appends a contact built from `candidate` and returns it.
    ///
    /// Every text field is trimmed before storing. Callers are responsible for
    /// rejecting blank names and phone numbers beforehand.
    pub fn add(&self, candidate: NewContact) -> Contact {
        let contact = {
            let mut inner = self.inner.write();
            let id = inner.next_id;
            let contact = Contact::from_candidate(id, candidate);
            inner.contacts.push(contact.clone());
            inner.next_id = id.next();
            contact
        };

        self.revision.send_modify(|rev| *rev += 1);
        info!(id = %contact.id(), name = %contact.name(), "Contact added");

        contact
    }

    #[must_use]
    pub fn get(&self, id: ContactId) -> Option<Contact> {
        self.inner
            .read()
            .contacts
            .iter()
            .find(|c| c.id() == id)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().contacts.is_empty()
    }

    /// Subscribes to change notifications. The subscription starts with no
    /// pending change.
    #[must_use]
    pub fn subscribe(&self) -> StoreSubscription {
        StoreSubscription {
            rx: self.revision.subscribe(),
        }
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Receives a signal whenever the store is mutated.
#[derive(Debug, Clone)]
pub struct StoreSubscription {
    rx: watch::Receiver<u64>,
}

impl StoreSubscription {
    /// Returns whether the store changed since the last acknowledgement.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Marks the current revision as seen and returns it.
    pub fn acknowledge(&mut self) -> u64 {
        *self.rx.borrow_and_update()
    }

    /// Waits for the next change. Returns `false` once every store handle is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
