//! Single-line text input component.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;

/// Messages for the text field component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Emitted after every change to the field value.
    Changed(String),
}

/// Style configuration for the text field.
#[derive(Debug, Clone)]
pub struct TextFieldStyle {
    /// Style applied to the input text.
    pub text: Style,
    /// Style applied to the placeholder text.
    pub placeholder: Style,
    /// Style applied to the cursor character.
    pub cursor: Style,
}

impl Default for TextFieldStyle {
    fn default() -> Self {
        Self {
            text: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// A single-line text input.
///
/// Keeps a character buffer and a cursor; processes printable characters,
/// Backspace/Delete, arrow/Home/End movement, and the usual readline-style
/// Ctrl-A/E/U/K bindings. Emits [`Message::Changed`] after every mutation so
/// an embedding form can react to edits.
///
/// ```rust,ignore
/// let mut name = TextField::new("Your name");
/// name.focus();
/// // parent update: let cmd = name.update(msg).map(Msg::Name);
/// // parent view:   name.view(frame, area);
/// ```
pub struct TextField {
    value: Vec<char>,
    cursor: usize,
    focus: bool,
    placeholder: String,
    char_limit: Option<usize>,
    style: TextFieldStyle,
}

impl TextField {
    /// Create a new text field with the given placeholder text.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            focus: false,
            placeholder: placeholder.into(),
            char_limit: None,
            style: TextFieldStyle::default(),
        }
    }

    /// Set the maximum number of characters allowed.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    /// Set custom styles for the field.
    pub fn with_style(mut self, style: TextFieldStyle) -> Self {
        self.style = style;
        self
    }

    /// Give this field keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Get the current value as a String.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Programmatically set the value and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.cursor = self.value.len();
    }

    /// Clear the value and reset the cursor.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters in the field.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Current cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn changed(&self) -> Command<Message> {
        Command::message(Message::Changed(self.value()))
    }

    fn insert_char(&mut self, c: char) -> Command<Message> {
        if let Some(limit) = self.char_limit {
            if self.value.len() >= limit {
                return Command::none();
            }
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        self.changed()
    }

    fn delete_backward(&mut self) -> Command<Message> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
            return self.changed();
        }
        Command::none()
    }

    fn delete_forward(&mut self) -> Command<Message> {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
            return self.changed();
        }
        Command::none()
    }
}

impl Component for TextField {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if !self.focus {
                    return Command::none();
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                        self.insert_char(c)
                    }
                    (KeyCode::Backspace, KeyModifiers::NONE) => self.delete_backward(),
                    (KeyCode::Delete, KeyModifiers::NONE) => self.delete_forward(),
                    (KeyCode::Left, KeyModifiers::NONE) => {
                        self.cursor = self.cursor.saturating_sub(1);
                        Command::none()
                    }
                    (KeyCode::Right, KeyModifiers::NONE) => {
                        if self.cursor < self.value.len() {
                            self.cursor += 1;
                        }
                        Command::none()
                    }
                    (KeyCode::Home, _) => {
                        self.cursor = 0;
                        Command::none()
                    }
                    (KeyCode::Char('a'), m) if m.contains(KeyModifiers::CONTROL) => {
                        self.cursor = 0;
                        Command::none()
                    }
                    (KeyCode::End, _) => {
                        self.cursor = self.value.len();
                        Command::none()
                    }
                    (KeyCode::Char('e'), m) if m.contains(KeyModifiers::CONTROL) => {
                        self.cursor = self.value.len();
                        Command::none()
                    }
                    (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => {
                        self.value.drain(..self.cursor);
                        self.cursor = 0;
                        self.changed()
                    }
                    (KeyCode::Char('k'), m) if m.contains(KeyModifiers::CONTROL) => {
                        self.value.truncate(self.cursor);
                        self.changed()
                    }
                    _ => Command::none(),
                }
            }
            Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();

        if self.value.is_empty() && !self.focus {
            spans.push(Span::styled(&self.placeholder, self.style.placeholder));
        } else if self.value.is_empty() {
            spans.push(Span::styled(" ", self.style.cursor));
        } else {
            let display: String = self.value.iter().collect();
            if self.focus {
                let before: String = display.chars().take(self.cursor).collect();
                let cursor_char = display.chars().nth(self.cursor);
                let after: String = display.chars().skip(self.cursor + 1).collect();

                if !before.is_empty() {
                    spans.push(Span::styled(before, self.style.text));
                }
                match cursor_char {
                    Some(c) => spans.push(Span::styled(c.to_string(), self.style.cursor)),
                    None => spans.push(Span::styled(" ", self.style.cursor)),
                }
                if !after.is_empty() {
                    spans.push(Span::styled(after, self.style.text));
                }
            } else {
                spans.push(Span::styled(display, self.style.text));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn new_field_is_empty() {
        let field = TextField::new("placeholder");
        assert!(field.is_empty());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn typing_characters() {
        let mut field = TextField::new("");
        field.focus();
        field.update(Message::KeyPress(key(KeyCode::Char('h'))));
        field.update(Message::KeyPress(key(KeyCode::Char('i'))));
        assert_eq!(field.value(), "hi");
    }

    #[test]
    fn typing_emits_changed() {
        let mut field = TextField::new("");
        field.focus();
        let cmd = field.update(Message::KeyPress(key(KeyCode::Char('x'))));
        match cmd.into_message() {
            Some(Message::Changed(v)) => assert_eq!(v, "x"),
            _ => panic!("expected Changed"),
        }
    }

    #[test]
    fn backspace_deletes_before_cursor() {
        let mut field = TextField::new("");
        field.focus();
        field.set_value("ab");
        field.update(Message::KeyPress(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn insert_in_the_middle() {
        let mut field = TextField::new("");
        field.focus();
        field.set_value("abc");
        field.update(Message::KeyPress(key(KeyCode::Left)));
        field.update(Message::KeyPress(key(KeyCode::Left)));
        field.update(Message::KeyPress(key(KeyCode::Char('x'))));
        assert_eq!(field.value(), "axbc");
    }

    #[test]
    fn home_and_end() {
        let mut field = TextField::new("");
        field.focus();
        field.set_value("hello");
        field.update(Message::KeyPress(key(KeyCode::Home)));
        field.update(Message::KeyPress(key(KeyCode::Char('!'))));
        assert_eq!(field.value(), "!hello");

        field.update(Message::KeyPress(key(KeyCode::End)));
        field.update(Message::KeyPress(key(KeyCode::Char('!'))));
        assert_eq!(field.value(), "!hello!");
    }

    #[test]
    fn ctrl_u_kills_to_start() {
        let mut field = TextField::new("");
        field.focus();
        field.set_value("hello world");
        field.update(Message::KeyPress(key_ctrl(KeyCode::Char('u'))));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn ctrl_k_kills_to_end() {
        let mut field = TextField::new("");
        field.focus();
        field.set_value("hello world");
        field.update(Message::KeyPress(key(KeyCode::Home)));
        for _ in 0..5 {
            field.update(Message::KeyPress(key(KeyCode::Right)));
        }
        field.update(Message::KeyPress(key_ctrl(KeyCode::Char('k'))));
        assert_eq!(field.value(), "hello");
    }

    #[test]
    fn char_limit_is_enforced() {
        let mut field = TextField::new("").with_char_limit(3);
        field.focus();
        for c in ['a', 'b', 'c', 'd'] {
            field.update(Message::KeyPress(key(KeyCode::Char(c))));
        }
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn unfocused_ignores_keys() {
        let mut field = TextField::new("");
        field.update(Message::KeyPress(key(KeyCode::Char('a'))));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn reset_clears_value_and_cursor() {
        let mut field = TextField::new("");
        field.set_value("hello");
        field.reset();
        assert!(field.is_empty());
        assert_eq!(field.cursor_position(), 0);
    }
}
