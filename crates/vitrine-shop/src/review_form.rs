//! Review submission form: reviewer name, review text, and a rating.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use vitrine_core::channel::ChannelSender;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_widgets::choice::{self, Choice};
use vitrine_widgets::chrome::focus_block;
use vitrine_widgets::field::{self, TextField};
use vitrine_widgets::focus::FocusGroup;

use crate::review::{Rating, Review, ReviewDraft, ValidationError};

/// Messages for the review form.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press routed into the form.
    KeyPress(KeyEvent),
    /// Name field messages.
    Name(field::Message),
    /// Review text field messages.
    Body(field::Message),
    /// Rating picker messages.
    Rating(choice::Message),
    /// Move focus to the next field.
    FocusNext,
    /// Move focus to the previous field.
    FocusPrev,
    /// Validate and submit the current draft.
    Submit,
    /// Emitted upward after a successful submit (direct wiring only).
    Submitted(Review),
}

/// A form collecting reviewer name, review text, and a rating.
///
/// The form is always in its editing state; a successful submit hands the
/// finished [`Review`] off and immediately resets the fields. A failed
/// submit leaves every field untouched and replaces the error list with one
/// entry per missing field. Any subsequent edit dismisses the whole list.
///
/// Delivery of a successful submission depends on wiring: without a sink the
/// form emits [`Message::Submitted`] for the parent chain to route; with a
/// sink (set through [`set_sink`](ReviewForm::set_sink)) it publishes to the
/// channel instead and emits nothing.
pub struct ReviewForm {
    name: TextField,
    body: TextField,
    rating: Choice,
    focus: FocusGroup<3>,
    errors: Vec<ValidationError>,
    sink: Option<ChannelSender<Review>>,
}

impl ReviewForm {
    /// Create an empty form with the name field focused.
    pub fn new() -> Self {
        let mut name = TextField::new("Your name");
        name.focus();
        let body = TextField::new("Your review");
        let rating = Choice::new(Rating::ALL.iter().map(Rating::to_string).collect());
        Self {
            name,
            body,
            rating,
            focus: FocusGroup::new(),
            errors: Vec::new(),
            sink: None,
        }
    }

    /// Deliver successful submissions to `sink` instead of emitting
    /// [`Message::Submitted`].
    pub fn set_sink(&mut self, sink: ChannelSender<Review>) {
        self.sink = Some(sink);
    }

    /// The current in-progress field values.
    pub fn draft(&self) -> ReviewDraft {
        ReviewDraft {
            name: self.name.value(),
            body: self.body.value(),
            rating: self.rating.selected().and_then(Rating::from_index),
        }
    }

    /// The errors from the most recent failed submit, if any.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn dismiss_errors(&mut self) {
        if !self.errors.is_empty() {
            self.errors.clear();
        }
    }

    fn apply_focus(&mut self) {
        match self.focus.focused() {
            0 => {
                self.name.focus();
                self.body.blur();
                self.rating.blur();
            }
            1 => {
                self.name.blur();
                self.body.focus();
                self.rating.blur();
            }
            _ => {
                self.name.blur();
                self.body.blur();
                self.rating.focus();
            }
        }
    }

    fn submit(&mut self) -> Command<Message> {
        match self.draft().validate() {
            Ok(review) => {
                self.name.reset();
                self.body.reset();
                self.rating.clear();
                self.errors.clear();
                match &self.sink {
                    Some(sink) => {
                        sink.send(review);
                        Command::none()
                    }
                    None => Command::message(Message::Submitted(review)),
                }
            }
            Err(errors) => {
                self.errors = errors;
                Command::none()
            }
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Command<Message> {
        match self.focus.focused() {
            0 => self
                .name
                .update(field::Message::KeyPress(key))
                .map(Message::Name),
            1 => self
                .body
                .update(field::Message::KeyPress(key))
                .map(Message::Body),
            _ => self
                .rating
                .update(choice::Message::KeyPress(key))
                .map(Message::Rating),
        }
    }
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ReviewForm {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Down => {
                    self.focus.focus_next();
                    self.apply_focus();
                    Command::none()
                }
                KeyCode::Up => {
                    self.focus.focus_prev();
                    self.apply_focus();
                    Command::none()
                }
                _ => self.route_key(key),
            },
            // An edit arriving from any field dismisses the whole error list.
            Message::Name(m) => {
                if matches!(m, field::Message::Changed(_)) {
                    self.dismiss_errors();
                }
                self.name.update(m).map(Message::Name)
            }
            Message::Body(m) => {
                if matches!(m, field::Message::Changed(_)) {
                    self.dismiss_errors();
                }
                self.body.update(m).map(Message::Body)
            }
            Message::Rating(m) => {
                if matches!(m, choice::Message::Select(_)) {
                    self.dismiss_errors();
                }
                self.rating.update(m).map(Message::Rating)
            }
            Message::FocusNext => {
                self.focus.focus_next();
                self.apply_focus();
                Command::none()
            }
            Message::FocusPrev => {
                self.focus.focus_prev();
                self.apply_focus();
                Command::none()
            }
            Message::Submit => self.submit(),
            Message::Submitted(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let [error_area, name_area, body_area, rating_area, _rest] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        if !self.errors.is_empty() {
            let mut lines = vec![Line::raw("Please, correct these errors!")];
            for error in &self.errors {
                lines.push(Line::raw(format!(" - {error}")));
            }
            let errors = Paragraph::new(lines).style(Style::default().fg(Color::Red));
            frame.render_widget(errors, error_area);
        }

        let block = focus_block("Name", self.name.focused());
        let inner = block.inner(name_area);
        frame.render_widget(block, name_area);
        self.name.view(frame, inner);

        let block = focus_block("Review", self.body.focused());
        let inner = block.inner(body_area);
        frame.render_widget(block, body_area);
        self.body.view(frame, inner);

        let block = focus_block("Rating", self.rating.focused());
        let inner = block.inner(rating_area);
        frame.render_widget(block, rating_area);
        self.rating.view(frame, inner);
    }

    fn focused(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use vitrine_core::channel::Channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Send a key and feed any resulting message back through the form, the
    /// way the runtime would.
    fn press(form: &mut ReviewForm, code: KeyCode) -> Option<Message> {
        let cmd = form.update(Message::KeyPress(key(code)));
        let msg = cmd.into_message();
        if let Some(m) = msg.clone() {
            form.update(m);
        }
        msg
    }

    fn type_str(form: &mut ReviewForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    /// Fill all three fields with a valid draft.
    fn fill(form: &mut ReviewForm) {
        type_str(form, "Ana");
        press(form, KeyCode::Down);
        type_str(form, "Great socks");
        press(form, KeyCode::Down);
        press(form, KeyCode::Char('3'));
    }

    #[test]
    fn empty_submit_reports_all_errors_in_order() {
        let mut form = ReviewForm::new();
        let cmd = form.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(cmd.is_none());

        let messages: Vec<String> = form.errors().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec!["Name required", "Review required", "Rating required"]
        );
        // The draft is untouched by a failed submit.
        assert_eq!(form.draft(), ReviewDraft::default());
    }

    #[test]
    fn partially_filled_submit_reports_only_the_missing_field() {
        let mut form = ReviewForm::new();
        type_str(&mut form, "Ana");
        press(&mut form, KeyCode::Down);
        type_str(&mut form, "Great socks");
        form.update(Message::KeyPress(key(KeyCode::Enter)));

        assert_eq!(form.errors(), &[ValidationError::MissingRating]);
        // Entered values survive the failed attempt.
        assert_eq!(form.draft().name, "Ana");
        assert_eq!(form.draft().body, "Great socks");
    }

    #[test]
    fn successful_submit_emits_the_review_and_resets() {
        let mut form = ReviewForm::new();
        fill(&mut form);

        let cmd = form.update(Message::KeyPress(key(KeyCode::Enter)));
        match cmd.into_message() {
            Some(Message::Submitted(review)) => {
                assert_eq!(review.name, "Ana");
                assert_eq!(review.body, "Great socks");
                assert_eq!(review.rating, Rating::Three);
            }
            _ => panic!("expected Submitted"),
        }

        assert_eq!(form.draft(), ReviewDraft::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn with_a_sink_the_review_is_published_not_emitted() {
        let channel: Channel<Review> = Channel::new("reviews", 8);
        let mut rx = channel.open_receiver();

        let mut form = ReviewForm::new();
        form.set_sink(channel.sender());
        fill(&mut form);

        let cmd = form.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(cmd.is_none());

        let review = rx.try_recv().expect("review published to the channel");
        assert_eq!(review.name, "Ana");
        assert_eq!(review.rating, Rating::Three);
        assert_eq!(form.draft(), ReviewDraft::default());
    }

    #[test]
    fn any_edit_dismisses_all_errors() {
        let mut form = ReviewForm::new();
        form.update(Message::KeyPress(key(KeyCode::Enter)));
        assert_eq!(form.errors().len(), 3);

        press(&mut form, KeyCode::Char('A'));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn rating_selection_also_dismisses_errors() {
        let mut form = ReviewForm::new();
        form.update(Message::KeyPress(key(KeyCode::Enter)));
        assert_eq!(form.errors().len(), 3);

        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Right);
        assert!(form.errors().is_empty());
        assert_eq!(form.draft().rating, Some(Rating::One));
    }

    #[test]
    fn focus_cycles_through_the_three_fields() {
        let mut form = ReviewForm::new();
        type_str(&mut form, "a");
        press(&mut form, KeyCode::Down);
        type_str(&mut form, "b");
        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Char('2'));
        press(&mut form, KeyCode::Down); // wraps back to the name field
        type_str(&mut form, "x");

        let draft = form.draft();
        assert_eq!(draft.name, "ax");
        assert_eq!(draft.body, "b");
        assert_eq!(draft.rating, Some(Rating::Two));
    }
}
