//! Add-contact form screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tracing::debug;

use crate::application::{AddContactController, FormField};
use crate::domain::entities::ContactId;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle, KeyHint, TextInput};

const HINTS: [KeyHint; 4] = [
    KeyHint::new("Tab", "Next"),
    KeyHint::new("S-Tab", "Prev"),
    KeyHint::new("C-s", "Save"),
    KeyHint::new("Esc", "Back"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Saved(ContactId),
    Rejected,
    Cancelled,
}

/// Four labelled inputs bound to an `AddContactController`.
pub struct AddContactScreen {
    controller: AddContactController,
    inputs: [TextInput; 4],
    focus: FormField,
    theme: Theme,
    show_footer: bool,
}

impl AddContactScreen {
    #[must_use]
    pub fn new(controller: AddContactController, theme: Theme, show_footer: bool) -> Self {
        let inputs = FormField::ALL.map(|field| {
            let label = if field.is_required() {
                format!(" {} * ", field.label())
            } else {
                format!(" {} ", field.label())
            };
            TextInput::new(label)
                .placeholder(placeholder(field))
                .accent(theme.accent)
        });

        let mut screen = Self {
            controller,
            inputs,
            focus: FormField::Name,
            theme,
            show_footer,
        };
        screen.set_focus(FormField::Name);
        screen
    }

    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    #[must_use]
    pub const fn controller(&self) -> &AddContactController {
        &self.controller
    }

    fn set_focus(&mut self, field: FormField) {
        self.inputs[self.focus.index()].set_focused(false);
        self.focus = field;
        self.inputs[field.index()].set_focused(true);
    }

    fn focused_input(&mut self) -> &mut TextInput {
        &mut self.inputs[self.focus.index()]
    }

    fn submit(&mut self) -> FormAction {
        match self.controller.submit() {
            Ok(contact) => FormAction::Saved(contact.id()),
            Err(_) => FormAction::Rejected,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if EventHandler::is_back_event(&key) {
            self.controller.cancel();
            return FormAction::Cancelled;
        }

        if EventHandler::is_submit_event(&key) {
            return self.submit();
        }

        match key.code {
            KeyCode::Enter => {
                if self.focus.is_last() {
                    return self.submit();
                }
                self.set_focus(self.focus.next());
                return FormAction::None;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(self.focus.next());
                return FormAction::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(self.focus.previous());
                return FormAction::None;
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.focused_input().input_char(c);
            }
            KeyCode::Backspace => self.focused_input().backspace(),
            KeyCode::Delete => self.focused_input().delete(),
            KeyCode::Left => self.focused_input().move_left(),
            KeyCode::Right => self.focused_input().move_right(),
            KeyCode::Home => self.focused_input().move_start(),
            KeyCode::End => self.focused_input().move_end(),
            _ => return FormAction::None,
        }

        let value = self.inputs[self.focus.index()].value().to_string();
        debug!(field = ?self.focus, "Form field changed");
        self.controller.set_field(self.focus, value);

        FormAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let footer_height = u16::from(self.show_footer);
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(" ← ", self.theme.dimmed_style),
            Span::styled("Add New Contact", self.theme.title_style),
        ]))
        .render(header_area, buf);

        let [_, form_area, _] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Max(60),
            Constraint::Fill(1),
        ])
        .areas(body_area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas::<7>(form_area);

        for (input, field_area) in self.inputs.iter().zip(&rows[1..5]) {
            input.render(*field_area, buf);
        }

        let save_line = Line::from(vec![
            Span::styled(" Save Contact ", self.theme.selection_style),
            Span::styled("  Enter on Email or Ctrl+S", self.theme.dimmed_style),
        ]);
        Paragraph::new(save_line).render(rows[6], buf);

        if self.show_footer {
            FooterBar::new(&HINTS)
                .style(FooterBarStyle::from_theme(&self.theme))
                .render(footer_area, buf);
        }
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Full name",
        FormField::Address => "Street, city",
        FormField::Phone => "Phone number",
        FormField::Email => "name@example.com",
    }
}

impl Widget for &AddContactScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ContactStore;
    use crate::domain::ports::mocks::{MockNavigationPort, RecordingNotifier};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut AddContactScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn build_screen(
        store: &ContactStore,
        navigation: MockNavigationPort,
    ) -> (AddContactScreen, Arc<RecordingNotifier>) {
        let notifications = Arc::new(RecordingNotifier::new());
        let controller =
            AddContactController::new(store.clone(), Arc::new(navigation), notifications.clone());
        (
            AddContactScreen::new(controller, Theme::default(), true),
            notifications,
        )
    }

    #[test]
    fn test_initial_state() {
        let store = ContactStore::seeded();
        let (screen, _) = build_screen(&store, MockNavigationPort::new());

        assert_eq!(screen.focus(), FormField::Name);
        assert!(screen.inputs[0].is_focused());
        assert!(!screen.inputs[1].is_focused());
        assert_eq!(screen.controller().form().name(), "");
    }

    #[test]
    fn test_typing_updates_focused_field_only() {
        let store = ContactStore::seeded();
        let (mut screen, _) = build_screen(&store, MockNavigationPort::new());

        type_text(&mut screen, "Dana");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Main St");
        screen.handle_key(key(KeyCode::Backspace));

        let form = screen.controller().form();
        assert_eq!(form.name(), "Dana");
        assert_eq!(form.address(), "Main S");
        assert_eq!(form.phone(), "");
    }

    #[test]
    fn test_focus_cycles() {
        let store = ContactStore::new();
        let (mut screen, _) = build_screen(&store, MockNavigationPort::new());

        screen.handle_key(key(KeyCode::BackTab));
        assert_eq!(screen.focus(), FormField::Email);
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.focus(), FormField::Name);
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.focus(), FormField::Address);
    }

    #[test]
    fn test_enter_on_last_field_submits() {
        let store = ContactStore::seeded();
        let mut navigation = MockNavigationPort::new();
        navigation.expect_go_back().times(1).return_const(());
        let (mut screen, notifications) = build_screen(&store, navigation);

        type_text(&mut screen, "Dana");
        screen.handle_key(key(KeyCode::Enter));
        screen.handle_key(key(KeyCode::Enter));
        type_text(&mut screen, "5551234");
        screen.handle_key(key(KeyCode::Enter));

        assert_eq!(screen.focus(), FormField::Email);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            FormAction::Saved(ContactId(4))
        );
        assert_eq!(store.len(), 4);
        assert_eq!(notifications.messages(), vec!["Contact Saved: Dana"]);
    }

    #[test]
    fn test_ctrl_s_with_blank_phone_is_rejected() {
        let store = ContactStore::seeded();
        let mut navigation = MockNavigationPort::new();
        navigation.expect_go_back().never();
        let (mut screen, notifications) = build_screen(&store, navigation);

        type_text(&mut screen, "Dana");
        let action = screen.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert_eq!(action, FormAction::Rejected);
        assert_eq!(store.len(), 3);
        assert_eq!(notifications.messages(), vec!["Name and Phone are required."]);
        assert_eq!(screen.controller().form().name(), "Dana");
    }

    #[test]
    fn test_escape_cancels() {
        let store = ContactStore::seeded();
        let mut navigation = MockNavigationPort::new();
        navigation.expect_go_back().times(1).return_const(());
        let (mut screen, _) = build_screen(&store, navigation);

        type_text(&mut screen, "Dana");
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), FormAction::Cancelled);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_render_shows_labels() {
        use ratatui::{Terminal, backend::TestBackend};

        let store = ContactStore::new();
        let (screen, _) = build_screen(&store, MockNavigationPort::new());

        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(&screen, frame.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();

        for label in ["Add New Contact", "Name *", "Address", "Phone *", "Email", "Save Contact"] {
            assert!(text.contains(label), "missing {label}");
        }
    }
}
