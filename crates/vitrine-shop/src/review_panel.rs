//! Tabbed review panel: the review list and the submission form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use vitrine_core::channel::ChannelSender;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_widgets::tabs::{self, TabBar};
use vitrine_widgets::trim::truncate_to_width;

use crate::review::Review;
use crate::review_form::{self, ReviewForm};

/// Title of the tab showing the review list.
pub const TAB_REVIEWS: &str = "Reviews";
/// Title of the tab hosting the submission form.
pub const TAB_MAKE_REVIEW: &str = "Make a Review";

/// Messages for the review panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press routed into the panel.
    KeyPress(KeyEvent),
    /// Tab bar messages.
    Tab(tabs::Message),
    /// Review form messages.
    Form(review_form::Message),
    /// Emitted upward when the hosted form submits successfully.
    Submitted(Review),
}

/// A two-tab panel: the review list under "Reviews" and the submission form
/// under "Make a Review".
///
/// Both regions exist for the panel's whole life -- switching tabs only
/// changes which one renders, so an in-progress draft survives leaving and
/// re-entering the form tab. The review list itself is owned by the product
/// display and mirrored in through [`set_reviews`](ReviewPanel::set_reviews).
pub struct ReviewPanel {
    tabs: TabBar,
    form: ReviewForm,
    reviews: Vec<Review>,
}

impl ReviewPanel {
    /// Create a panel with the review list tab active.
    pub fn new() -> Self {
        Self {
            tabs: TabBar::new(vec![TAB_REVIEWS.to_string(), TAB_MAKE_REVIEW.to_string()]),
            form: ReviewForm::new(),
            reviews: Vec::new(),
        }
    }

    /// Deliver the form's submissions to `sink` instead of bubbling them up
    /// (builder variant, for channel wiring).
    pub fn with_review_sink(mut self, sink: ChannelSender<Review>) -> Self {
        self.form.set_sink(sink);
        self
    }

    /// Activate the tab with the given title. Unknown titles are ignored.
    pub fn switch_tab(&mut self, label: &str) {
        self.tabs.select_label(label);
    }

    /// Title of the active tab.
    pub fn active_tab(&self) -> &str {
        self.tabs.active_label()
    }

    /// Whether the form tab is the active one.
    pub fn form_active(&self) -> bool {
        self.tabs.active_label() == TAB_MAKE_REVIEW
    }

    /// Replace the mirrored review list.
    pub fn set_reviews(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews;
    }

    /// The hosted form (draft and error inspection).
    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    fn view_reviews(&self, frame: &mut Frame, area: Rect) {
        if self.reviews.is_empty() {
            let empty = Paragraph::new("There are no reviews yet!")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width as usize;
        let mut lines = Vec::new();
        for review in &self.reviews {
            lines.push(Line::from(vec![
                Span::styled(
                    review.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  rated {}/3", review.rating),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::raw(format!(
                "  {}",
                truncate_to_width(&review.body, width.saturating_sub(2))
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for ReviewPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ReviewPanel {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                // Tab always drives the tab bar, even while the form is
                // capturing text.
                if key.code == KeyCode::Tab {
                    return self
                        .tabs
                        .update(tabs::Message::KeyPress(key))
                        .map(Message::Tab);
                }
                if self.form_active() {
                    return self
                        .form
                        .update(review_form::Message::KeyPress(key))
                        .map(Message::Form);
                }
                Command::none()
            }
            Message::Tab(m) => self.tabs.update(m).map(Message::Tab),
            Message::Form(review_form::Message::Submitted(review)) => {
                Command::message(Message::Submitted(review))
            }
            Message::Form(m) => self.form.update(m).map(Message::Form),
            Message::Submitted(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let [tab_area, content_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        self.tabs.view(frame, tab_area);

        if self.form_active() {
            self.form.view(frame, content_area);
        } else {
            self.view_reviews(frame, content_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Rating;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Send a key and feed any resulting message back through the panel.
    fn press(panel: &mut ReviewPanel, code: KeyCode) {
        let cmd = panel.update(Message::KeyPress(key(code)));
        if let Some(m) = cmd.into_message() {
            panel.update(m);
        }
    }

    #[test]
    fn reviews_tab_starts_active() {
        let panel = ReviewPanel::new();
        assert_eq!(panel.active_tab(), TAB_REVIEWS);
        assert!(!panel.form_active());
    }

    #[test]
    fn switch_tab_by_label() {
        let mut panel = ReviewPanel::new();
        panel.switch_tab(TAB_MAKE_REVIEW);
        assert!(panel.form_active());
        panel.switch_tab(TAB_REVIEWS);
        assert!(!panel.form_active());
    }

    #[test]
    fn unknown_tab_label_is_ignored() {
        let mut panel = ReviewPanel::new();
        panel.switch_tab("Checkout");
        assert_eq!(panel.active_tab(), TAB_REVIEWS);
    }

    #[test]
    fn tab_key_toggles_the_active_tab() {
        let mut panel = ReviewPanel::new();
        press(&mut panel, KeyCode::Tab);
        assert!(panel.form_active());
        press(&mut panel, KeyCode::Tab);
        assert!(!panel.form_active());
    }

    #[test]
    fn draft_survives_tab_switches() {
        let mut panel = ReviewPanel::new();
        press(&mut panel, KeyCode::Tab);
        for c in "An".chars() {
            press(&mut panel, KeyCode::Char(c));
        }
        press(&mut panel, KeyCode::Tab);
        press(&mut panel, KeyCode::Tab);
        assert_eq!(panel.form().draft().name, "An");
    }

    #[test]
    fn form_submission_is_re_emitted_upward() {
        let mut panel = ReviewPanel::new();
        let review = Review {
            name: "Ana".into(),
            body: "Great socks".into(),
            rating: Rating::Two,
        };
        let cmd = panel.update(Message::Form(review_form::Message::Submitted(
            review.clone(),
        )));
        match cmd.into_message() {
            Some(Message::Submitted(r)) => assert_eq!(r, review),
            _ => panic!("expected Submitted"),
        }
    }

    #[test]
    fn keys_reach_the_form_only_on_its_tab() {
        let mut panel = ReviewPanel::new();
        press(&mut panel, KeyCode::Char('A'));
        assert_eq!(panel.form().draft().name, "");

        press(&mut panel, KeyCode::Tab);
        press(&mut panel, KeyCode::Char('A'));
        assert_eq!(panel.form().draft().name, "A");
    }
}
