//! Contact list screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::application::ContactListController;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle, KeyHint};

const HINTS: [KeyHint; 3] = [
    KeyHint::new("a", "Add"),
    KeyHint::new("↑↓", "Move"),
    KeyHint::new("q", "Quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    None,
    Quit,
}

/// Scrollable list of every contact with an add action.
pub struct ContactListScreen {
    controller: ContactListController,
    selected: Option<usize>,
    theme: Theme,
    show_footer: bool,
}

impl ContactListScreen {
    #[must_use]
    pub fn new(controller: ContactListController, theme: Theme, show_footer: bool) -> Self {
        let selected = if controller.render().is_empty() {
            None
        } else {
            Some(0)
        };

        Self {
            controller,
            selected,
            theme,
            show_footer,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Applies pending store changes. Returns `true` if a redraw is needed.
    ///
    /// The newest contact becomes the selection.
    pub fn sync_with_store(&mut self) -> bool {
        if !self.controller.has_pending_changes() {
            return false;
        }
        self.controller.acknowledge_changes();
        self.selected = self.controller.render().len().checked_sub(1);
        true
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ListAction {
        match key.code {
            KeyCode::Char('a' | 'n' | '+') => self.controller.on_add_requested(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.select_edge(false),
            KeyCode::End | KeyCode::Char('G') => self.select_edge(true),
            KeyCode::Char('q') | KeyCode::Esc => return ListAction::Quit,
            _ => {}
        }

        ListAction::None
    }

    fn select_next(&mut self) {
        let len = self.controller.render().len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    fn select_previous(&mut self) {
        let len = self.controller.render().len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + len - 1) % len));
    }

    fn select_edge(&mut self, last: bool) {
        let len = self.controller.render().len();
        self.selected = match (len, last) {
            (0, _) => None,
            (_, false) => Some(0),
            (n, true) => Some(n - 1),
        };
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let footer_height = u16::from(self.show_footer);
        let [header_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        let rows = self.controller.render();

        let header = Line::from(vec![
            Span::styled(" Contact ", self.theme.title_style),
            Span::styled(format!("({})", rows.len()), self.theme.dimmed_style),
        ]);
        Paragraph::new(header).render(header_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.dimmed_style);

        if rows.is_empty() {
            Paragraph::new("No contacts yet. Press a to add one.")
                .style(self.theme.dimmed_style)
                .block(block)
                .render(list_area, buf);
        } else {
            let items: Vec<ListItem<'_>> = rows
                .iter()
                .map(|row| {
                    ListItem::new(vec![
                        Line::from(Span::styled(
                            row.name,
                            ratatui::style::Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(row.address, self.theme.dimmed_style)),
                    ])
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(self.theme.selection_style)
                .highlight_symbol("> ");

            let selected = self.selected.map(|i| i.min(rows.len() - 1));
            let mut state = ListState::default().with_selected(selected);
            StatefulWidget::render(list, list_area, buf, &mut state);
        }

        if self.show_footer {
            FooterBar::new(&HINTS)
                .style(FooterBarStyle::from_theme(&self.theme))
                .render(footer_area, buf);
        }
    }
}

impl Widget for &ContactListScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
