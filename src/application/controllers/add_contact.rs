//! Add-contact screen controller.

use std::sync::Arc;

use tracing::debug;

use crate::application::dto::{ContactForm, FormField};
use crate::application::store::ContactStore;
use crate::domain::entities::Contact;
use crate::domain::errors::ValidationError;
use crate::domain::notification::NotificationDuration;
use crate::domain::ports::{NavigationPort, NotificationPort};

/// Holds the uncommitted form and commits it to the store.
pub struct AddContactController {
    form: ContactForm,
    store: ContactStore,
    navigation: Arc<dyn NavigationPort>,
    notifications: Arc<dyn NotificationPort>,
}

impl AddContactController {
    #[must_use]
    pub fn new(
        store: ContactStore,
        navigation: Arc<dyn NavigationPort>,
        notifications: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            form: ContactForm::new(),
            store,
            navigation,
            notifications,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.set_name(value);
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.form.set_address(value);
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.form.set_phone(value);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.set_email(value);
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validates the form, stores the contact, confirms and navigates back.
    ///
    /// On validation failure the user is notified and nothing else happens.
    ///
    /// # Errors
    /// Returns `ValidationError` if name or phone is blank.
    pub fn submit(&mut self) -> Result<Contact, ValidationError> {
        let candidate = match self.form.to_candidate() {
            Ok(candidate) => candidate,
            Err(e) => {
                debug!(missing = ?e.missing_fields(), "Contact form rejected");
                self.notifications
                    .notify(&e.to_string(), NotificationDuration::Short);
                return Err(e);
            }
        };

        let contact = self.store.add(candidate);

        self.notifications.notify(
            &format!("Contact Saved: {}", contact.name()),
            NotificationDuration::Long,
        );
        self.navigation.go_back();

        Ok(contact)
    }

    /// Leaves the form without saving.
    pub fn cancel(&self) {
        debug!("Add contact cancelled");
        self.navigation.go_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContactId;
    use crate::domain::ports::mocks::{MockNavigationPort, MockNotificationPort, RecordingNotifier};
    use mockall::Sequence;
    use mockall::predicate::{always, eq, function};

    fn rejecting_ports() -> (Arc<MockNavigationPort>, Arc<MockNotificationPort>) {
        let mut navigation = MockNavigationPort::new();
        navigation.expect_go_back().never();
        navigation.expect_navigate_to().never();

        let mut notifications = MockNotificationPort::new();
        notifications
            .expect_notify()
            .with(
                function(|message: &str| message == "Name and Phone are required."),
                eq(NotificationDuration::Short),
            )
            .times(1)
            .return_const(());

        (Arc::new(navigation), Arc::new(notifications))
    }

    #[test]
    fn test_blank_name_is_rejected_without_store_change() {
        let store = ContactStore::seeded();
        let (navigation, notifications) = rejecting_ports();
        let mut controller = AddContactController::new(store.clone(), navigation, notifications);

        controller.set_name("   ");
        controller.set_phone("5551234");

        assert!(controller.submit().is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_blank_phone_is_rejected_without_store_change() {
        let store = ContactStore::seeded();
        let (navigation, notifications) = rejecting_ports();
        let mut controller = AddContactController::new(store.clone(), navigation, notifications);

        controller.set_name("Dana");

        let err = controller.submit().unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &[crate::domain::errors::RequiredField::Phone]
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_rejection_keeps_form_values() {
        let store = ContactStore::new();
        let (navigation, notifications) = rejecting_ports();
        let mut controller = AddContactController::new(store, navigation, notifications);

        controller.set_address("somewhere");
        let _ = controller.submit();

        assert_eq!(controller.form().address(), "somewhere");
    }

    #[test]
    fn test_submit_stores_then_notifies_then_navigates_back() {
        let store = ContactStore::seeded();
        let mut seq = Sequence::new();

        let mut notifications = MockNotificationPort::new();
        let observed = store.clone();
        notifications
            .expect_notify()
            .with(always(), eq(NotificationDuration::Long))
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |message, _| {
                assert_eq!(message, "Contact Saved: Dana");
                assert_eq!(observed.len(), 4);
            });

        let mut navigation = MockNavigationPort::new();
        navigation
            .expect_go_back()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut controller =
            AddContactController::new(store.clone(), Arc::new(navigation), Arc::new(notifications));
        controller.set_name("Dana");
        controller.set_phone("5551234");

        let contact = controller.submit().unwrap();
        assert_eq!(contact.id(), ContactId(4));
    }

    #[test]
    fn test_submit_trims_name() {
        let store = ContactStore::seeded();
        let mut navigation = MockNavigationPort::new();
        navigation.expect_go_back().return_const(());
        let notifications = Arc::new(RecordingNotifier::new());

        let mut controller =
            AddContactController::new(store.clone(), Arc::new(navigation), notifications.clone());
        controller.set_name("  Bob  ");
        controller.set_phone(" 42 ");

        let contact = controller.submit().unwrap();

        let contacts = store.list();
        assert_eq!(contact.name(), "Bob");
        assert_eq!(contacts.last().map(Contact::name), Some("Bob"));
        assert_eq!(notifications.messages(), vec!["Contact Saved: Bob"]);
    }

    #[test]
    fn test_end_to_end_dana() {
        let store = ContactStore::seeded();
        let mut navigation = MockNavigationPort::new();
        navigation.expect_go_back().times(1).return_const(());
        navigation.expect_navigate_to().never();
        let notifications = Arc::new(RecordingNotifier::new());

        let mut controller =
            AddContactController::new(store.clone(), Arc::new(navigation), notifications.clone());
        controller.set_name("Dana");
        controller.set_phone("5551234");
        controller.set_address("");
        controller.set_email("");

        controller.submit().unwrap();

        let contacts = store.list();
        assert_eq!(contacts.len(), 4);
        assert_eq!(
            contacts[3],
            Contact::new(ContactId(4), "Dana", "", "5551234", "")
        );
        let messages = notifications.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Dana"));
    }

    #[test]
    fn test_cancel_goes_back_without_saving() {
        let store = ContactStore::seeded();
        let mut navigation = MockNavigationPort::new();
        navigation.expect_go_back().times(1).return_const(());
        let mut notifications = MockNotificationPort::new();
        notifications.expect_notify().never();

        let mut controller =
            AddContactController::new(store.clone(), Arc::new(navigation), Arc::new(notifications));
        controller.set_field(FormField::Name, "Dana");
        controller.cancel();

        assert_eq!(store.len(), 3);
    }
}
