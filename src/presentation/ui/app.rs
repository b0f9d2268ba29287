//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::services::NotificationManager;
use crate::application::{AddContactController, ContactListController, ContactStore};
use crate::domain::ScreenId;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::navigation::Navigator;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    AddContactScreen, ContactListScreen, FormAction, ListAction, NotificationPopup,
};

const NOTIFICATION_TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Owns the session: store, navigation stack, toast queue and screens.
pub struct App {
    state: AppState,
    store: ContactStore,
    navigator: Arc<Navigator>,
    notifications: Arc<NotificationManager>,
    list_screen: ContactListScreen,
    add_screen: Option<AddContactScreen>,
    theme: Theme,
    show_footer: bool,
}

impl App {
    #[must_use]
    pub fn new(store: ContactStore, config: &AppConfig) -> Self {
        let navigator = Arc::new(Navigator::new(ScreenId::ContactList));
        let notifications = Arc::new(NotificationManager::new(config.ui.toast_durations()));
        let theme = Theme::new(&config.theme.accent_color);
        let show_footer = config.ui.show_footer;

        let list_screen = ContactListScreen::new(
            ContactListController::new(store.clone(), navigator.clone()),
            theme,
            show_footer,
        );

        Self {
            state: AppState::Running,
            store,
            navigator,
            notifications,
            list_screen,
            add_screen: None,
            theme,
            show_footer,
        }
    }

    /// Returns the screen currently shown.
    #[must_use]
    pub fn current_screen(&self) -> ScreenId {
        if self.add_screen.is_some() {
            ScreenId::AddContact
        } else {
            ScreenId::ContactList
        }
    }

    #[must_use]
    pub const fn store(&self) -> &ContactStore {
        &self.store
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(contacts = self.store.len(), "Starting contact list");

        let mut terminal_events = EventStream::new();
        let mut notification_interval = interval(NOTIFICATION_TICK_RATE);
        let mut store_changes = self.store.subscribe();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event
                        && self.handle_key(key) == EventResult::Exit
                    {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = notification_interval.tick() => {
                    if self.notifications.tick() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                true = store_changes.changed() => {
                    store_changes.acknowledge();
                    self.list_screen.sync_with_store();
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    /// Routes a key to the visible screen and applies any navigation it caused.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_actionable(&key) {
            return EventResult::Continue;
        }

        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        if let Some(screen) = &mut self.add_screen {
            match screen.handle_key(key) {
                FormAction::Saved(id) => {
                    if let Some(contact) = self.store.get(id) {
                        debug!(%id, name = contact.name(), "Contact saved from form");
                    }
                }
                FormAction::Rejected => debug!("Contact form rejected"),
                FormAction::Cancelled | FormAction::None => {}
            }
        } else if self.list_screen.handle_key(key) == ListAction::Quit {
            return EventResult::Exit;
        }

        self.sync_screens();
        EventResult::Continue
    }

    fn sync_screens(&mut self) {
        let target = self.navigator.current();
        if target == self.current_screen() {
            return;
        }

        match target {
            ScreenId::AddContact => {
                let controller = AddContactController::new(
                    self.store.clone(),
                    self.navigator.clone(),
                    self.notifications.clone(),
                );
                self.add_screen = Some(AddContactScreen::new(
                    controller,
                    self.theme,
                    self.show_footer,
                ));
            }
            ScreenId::ContactList => {
                self.add_screen = None;
                self.list_screen.sync_with_store();
            }
        }
        debug!(screen = %target, "Screen changed");
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match &self.add_screen {
            Some(screen) => frame.render_widget(screen, area),
            None => frame.render_widget(&self.list_screen, area),
        }

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(NotificationPopup::new(&notification, &self.theme), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationLevel;
    use crate::domain::entities::ContactId;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::style::Color;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn seeded_app() -> App {
        App::new(ContactStore::seeded(), &AppConfig::default())
    }

    fn toast_border_color(app: &App) -> Color {
        let toast = app.notifications().current_notification().unwrap();
        let width = u16::try_from(toast.message.len()).unwrap() + 4;
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().buffer()[(70 - width - 2, 1)].fg
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_app_starts_on_list() {
        let app = seeded_app();
        assert_eq!(app.current_screen(), ScreenId::ContactList);
        assert_eq!(app.store().len(), 3);
    }

    #[test]
    fn test_add_then_back_without_saving() {
        let mut app = seeded_app();

        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.current_screen(), ScreenId::AddContact);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.current_screen(), ScreenId::ContactList);
        assert_eq!(app.store().len(), 3);
        assert!(app.notifications().current_notification().is_none());
    }

    #[test]
    fn test_end_to_end_add_dana() {
        let mut app = seeded_app();

        app.handle_key(key(KeyCode::Char('a')));
        type_text(&mut app, "Dana");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "5551234");
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert_eq!(app.current_screen(), ScreenId::ContactList);
        let contacts = app.store().list();
        assert_eq!(contacts.len(), 4);
        assert_eq!(contacts[3].id(), ContactId(4));
        assert_eq!(contacts[3].name(), "Dana");
        assert_eq!(contacts[3].phone_number(), "5551234");
        assert_eq!(contacts[3].address(), "");
        assert_eq!(contacts[3].email(), "");

        let toast = app.notifications().current_notification().unwrap();
        assert!(toast.message.contains("Dana"));

        let text = screen_text(&app);
        assert!(text.contains("(4)"));
        assert!(text.contains("Contact Saved: Dana"));
    }

    #[test]
    fn test_rejected_submit_stays_on_form() {
        let mut app = seeded_app();

        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert_eq!(app.current_screen(), ScreenId::AddContact);
        assert_eq!(app.store().len(), 3);
        let toast = app.notifications().current_notification().unwrap();
        assert_eq!(toast.message, "Name and Phone are required.");
        assert_eq!(toast.level, NotificationLevel::Error);
    }

    #[test]
    fn test_error_and_success_toasts_differ_in_color() {
        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let error_color = toast_border_color(&app);

        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('a')));
        type_text(&mut app, "Dana");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "5551234");
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let success_color = toast_border_color(&app);

        assert_eq!(error_color, Color::Red);
        assert_eq!(success_color, app.theme.accent);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = seeded_app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Exit);

        let mut app = seeded_app();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Continue);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Exit
        );
    }

    #[test]
    fn test_form_is_fresh_each_time() {
        let mut app = seeded_app();

        app.handle_key(key(KeyCode::Char('a')));
        type_text(&mut app, "draft");
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('a')));

        let form = app.add_screen.as_ref().unwrap().controller().form();
        assert_eq!(form.name(), "");
    }
}
