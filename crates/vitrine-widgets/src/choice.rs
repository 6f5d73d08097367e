//! Horizontal single-choice picker.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;

/// Messages for the choice component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the picker.
    KeyPress(KeyEvent),
    /// Emitted when an option is selected, carrying its index.
    Select(usize),
}

/// Visual style configuration for the [`Choice`] component.
#[derive(Debug, Clone)]
pub struct ChoiceStyle {
    /// Style applied to unselected options.
    pub normal: Style,
    /// Style applied to the selected option.
    pub selected: Style,
    /// Marker rendered in front of the selected option.
    pub marker: String,
}

impl Default for ChoiceStyle {
    fn default() -> Self {
        Self {
            normal: Style::default().fg(Color::DarkGray),
            selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            marker: "▸".to_string(),
        }
    }
}

/// A horizontal single-select over a fixed list of labels.
///
/// Selection is an `Option<usize>` and may start empty, which is what a
/// not-yet-rated review form needs. Left/Right (or `h`/`l`) cycle through
/// the options with wrap-around -- from an empty selection, Right lands on
/// the first option and Left on the last. Digit keys jump directly to the
/// matching one-based option.
pub struct Choice {
    options: Vec<String>,
    selected: Option<usize>,
    focus: bool,
    style: ChoiceStyle,
}

impl Choice {
    /// Create a picker with the given options and no selection.
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
            focus: false,
            style: ChoiceStyle::default(),
        }
    }

    /// Pre-select the option at the given index (builder variant).
    ///
    /// Out-of-range indices leave the selection empty.
    pub fn with_selected(mut self, index: usize) -> Self {
        self.select(index);
        self
    }

    /// Set the visual style for this picker.
    pub fn with_style(mut self, style: ChoiceStyle) -> Self {
        self.style = style;
        self
    }

    /// Give this picker keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Index of the selected option, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Label of the selected option, if any.
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i).map(|s| s.as_str()))
    }

    /// The option labels.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Select the option at the given index. Out-of-range requests are
    /// ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
        }
    }

    /// Return to no selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Move to the next option, wrapping past the last. From an empty
    /// selection this lands on the first option.
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Move to the previous option, wrapping past the first. From an empty
    /// selection this lands on the last option.
    pub fn select_prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len();
        self.selected = Some(match self.selected {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        });
    }
}

impl Component for Choice {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.select_prev();
                    match self.selected {
                        Some(i) => Command::message(Message::Select(i)),
                        None => Command::none(),
                    }
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.select_next();
                    match self.selected {
                        Some(i) => Command::message(Message::Select(i)),
                        None => Command::none(),
                    }
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let idx = c.to_digit(10).unwrap() as usize;
                    if idx > 0 && idx <= self.options.len() {
                        self.selected = Some(idx - 1);
                        Command::message(Message::Select(idx - 1))
                    } else {
                        Command::none()
                    }
                }
                _ => Command::none(),
            },
            Message::Select(i) => {
                self.select(i);
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, option) in self.options.iter().enumerate() {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            if self.selected == Some(i) {
                spans.push(Span::styled(
                    format!("{} {}", self.style.marker, option),
                    self.style.selected,
                ));
            } else {
                spans.push(Span::styled(format!("  {option}"), self.style.normal));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
