//! Tab bar for switching between named views.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs as RatatuiTabs};
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;

/// Messages for the tab bar component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the tab bar.
    KeyPress(KeyEvent),
    /// Emitted when a tab becomes active, carrying the tab index.
    Select(usize),
}

/// Visual style configuration for the [`TabBar`] component.
#[derive(Debug, Clone)]
pub struct TabBarStyle {
    /// Style applied to inactive tab titles.
    pub normal: Style,
    /// Style applied to the active tab title.
    pub active: Style,
    /// Style applied to the divider and bottom border.
    pub border: Style,
    /// String rendered between tab titles.
    pub divider: String,
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self {
            normal: Style::default().fg(Color::DarkGray),
            active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            divider: " | ".to_string(),
        }
    }
}

/// A horizontal bar of named tabs tracking the active one.
///
/// The tab set is fixed at construction and ordered; the first tab starts
/// active. Tabs can be addressed by index ([`select`](TabBar::select)) or by
/// title ([`select_label`](TabBar::select_label)); requests naming an
/// unknown tab are ignored.
pub struct TabBar {
    titles: Vec<String>,
    active: usize,
    style: TabBarStyle,
}

impl TabBar {
    /// Create a tab bar with the given titles; the first tab is active.
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            active: 0,
            style: TabBarStyle::default(),
        }
    }

    /// Set the visual style for this tab bar.
    pub fn with_style(mut self, style: TabBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Index of the active tab.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Title of the active tab.
    pub fn active_label(&self) -> &str {
        &self.titles[self.active]
    }

    /// The tab titles.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Activate the tab at the given index. Out-of-range requests are
    /// ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.titles.len() {
            self.active = index;
        }
    }

    /// Activate the tab with the given title. Unknown titles are ignored.
    pub fn select_label(&mut self, label: &str) {
        if let Some(index) = self.titles.iter().position(|t| t == label) {
            self.active = index;
        }
    }

    /// Activate the next tab, wrapping past the last.
    pub fn select_next(&mut self) {
        if !self.titles.is_empty() {
            self.active = (self.active + 1) % self.titles.len();
        }
    }

    /// Activate the previous tab, wrapping past the first.
    pub fn select_prev(&mut self) {
        if !self.titles.is_empty() {
            self.active = (self.active + self.titles.len() - 1) % self.titles.len();
        }
    }
}

impl Component for TabBar {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.select_prev();
                    Command::message(Message::Select(self.active))
                }
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                    self.select_next();
                    Command::message(Message::Select(self.active))
                }
                _ => Command::none(),
            },
            Message::Select(i) => {
                self.select(i);
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = self.titles.iter().map(|t| Line::raw(t.as_str())).collect();

        let tabs = RatatuiTabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(self.style.border),
            )
            .select(self.active)
            .style(self.style.normal)
            .highlight_style(self.style.active)
            .divider(&self.style.divider);

        frame.render_widget(tabs, area);
    }
}
