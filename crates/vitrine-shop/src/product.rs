//! Product display: variant selection, stock/shipping derivations, cart
//! intents, and review intake.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use vitrine_core::channel::Channel;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::subscription::Subscription;
use vitrine_widgets::choice::{self, Choice};

use crate::catalog::{Catalog, Shipping, Variant, VariantId};
use crate::review::Review;
use crate::review_panel::{self, ReviewPanel};

/// Flat shipping cost for non-premium orders.
const STANDARD_SHIPPING: f64 = 2.99;

/// How a submitted review travels from the form back to the product.
///
/// Exactly one strategy is active per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wiring {
    /// The form's submission bubbles up through the panel as ordinary
    /// messages. The simpler strategy, and the default.
    #[default]
    Direct,
    /// The product owns a scoped [`Channel`]; the form publishes into it and
    /// the product consumes it as a subscription.
    Channel,
}

/// Messages for the product display.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press routed into the product display.
    KeyPress(KeyEvent),
    /// Select the variant at the given index.
    SelectVariant(usize),
    /// Variant picker messages.
    Swatch(choice::Message),
    /// Review panel messages.
    Panel(review_panel::Message),
    /// Emitted upward: the user wants the given variant added to the cart.
    AddRequested(VariantId),
    /// Emitted upward: the user wants one copy of the given variant removed.
    RemoveRequested(VariantId),
    /// A review arrived over the channel wiring.
    ReviewReceived(Review),
}

/// The product pane: catalog, variant picker, derived display values, and
/// the hosted review panel.
///
/// The picker holds the selected index -- there is no second copy -- and every
/// derivation ([`image`](ProductDisplay::image),
/// [`in_stock`](ProductDisplay::in_stock), …) reads through it. The cart
/// itself lives in the root model; this component only raises add/remove
/// intents carrying the selected variant's id and mirrors the cart length
/// for display.
pub struct ProductDisplay {
    brand: String,
    product: String,
    catalog: Catalog,
    premium: bool,
    details: Vec<String>,
    cart_count: usize,
    reviews: Vec<Review>,
    swatches: Choice,
    panel: ReviewPanel,
    review_feed: Option<Channel<Review>>,
}

impl ProductDisplay {
    /// Create a product display.
    ///
    /// `premium` and `details` are static inputs from the root;
    /// `wiring` picks the review delivery strategy.
    pub fn new(
        brand: impl Into<String>,
        product: impl Into<String>,
        catalog: Catalog,
        premium: bool,
        details: Vec<String>,
        wiring: Wiring,
    ) -> Self {
        let mut swatches = Choice::new(catalog.colors()).with_selected(0);
        swatches.focus();

        let mut panel = ReviewPanel::new();
        let review_feed = match wiring {
            Wiring::Direct => None,
            Wiring::Channel => {
                // The product is the nearest common ancestor of the form and
                // the review list, so it owns the channel; everything drops
                // together when the product goes away.
                let channel = Channel::new("product-reviews", 16);
                panel = panel.with_review_sink(channel.sender());
                Some(channel)
            }
        };

        Self {
            brand: brand.into(),
            product: product.into(),
            catalog,
            premium,
            details,
            cart_count: 0,
            reviews: Vec::new(),
            swatches,
            panel,
            review_feed,
        }
    }

    /// Display title: brand followed by product name.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.product)
    }

    /// Index of the selected variant.
    pub fn selected_index(&self) -> usize {
        // The picker starts at 0 and never clears, so a selection always
        // exists.
        self.swatches.selected().unwrap_or(0)
    }

    /// The selected variant.
    pub fn selected_variant(&self) -> &Variant {
        self.catalog.variant(self.selected_index())
    }

    /// Select the variant at `index`. Out-of-range requests are ignored.
    pub fn select_variant(&mut self, index: usize) {
        self.swatches.select(index);
    }

    /// Image URL of the selected variant.
    pub fn image(&self) -> &str {
        self.selected_variant().image()
    }

    /// Whether the selected variant is in stock.
    pub fn in_stock(&self) -> bool {
        self.selected_variant().in_stock()
    }

    /// Shipping cost for this order.
    pub fn shipping(&self) -> Shipping {
        if self.premium {
            Shipping::Free
        } else {
            Shipping::Cost(STANDARD_SHIPPING)
        }
    }

    /// Raise an add-to-cart intent for the selected variant.
    pub fn add_to_cart(&self) -> Command<Message> {
        Command::message(Message::AddRequested(self.selected_variant().id()))
    }

    /// Raise a remove-from-cart intent for the selected variant.
    pub fn remove_from_cart(&self) -> Command<Message> {
        Command::message(Message::RemoveRequested(self.selected_variant().id()))
    }

    /// Append a review and mirror the updated list into the panel.
    pub fn receive_review(&mut self, review: Review) {
        self.reviews.push(review);
        self.panel.set_reviews(self.reviews.clone());
    }

    /// The collected reviews, oldest first.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Mirror the root's cart length (display and remove-gating).
    pub fn set_cart_count(&mut self, count: usize) {
        self.cart_count = count;
    }

    /// The hosted review panel.
    pub fn panel(&self) -> &ReviewPanel {
        &self.panel
    }

    /// Whether the review form tab is currently capturing input.
    pub fn form_active(&self) -> bool {
        self.panel.form_active()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        // Tab always reaches the panel's tab bar; while the form tab is
        // active, so does everything else.
        if key.code == KeyCode::Tab || self.form_active() {
            return self
                .panel
                .update(review_panel::Message::KeyPress(key))
                .map(Message::Panel);
        }
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => self
                .swatches
                .update(choice::Message::KeyPress(key))
                .map(Message::Swatch),
            // The source disables these buttons instead of rejecting the
            // intent, so the gate lives here on the interaction path.
            KeyCode::Char('a') if self.in_stock() => self.add_to_cart(),
            KeyCode::Char('d') if self.cart_count > 0 => self.remove_from_cart(),
            _ => Command::none(),
        }
    }
}

impl Component for ProductDisplay {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => self.handle_key(key),
            Message::SelectVariant(index) => {
                self.select_variant(index);
                Command::none()
            }
            Message::Swatch(m) => self.swatches.update(m).map(Message::Swatch),
            Message::Panel(review_panel::Message::Submitted(review)) => {
                self.receive_review(review);
                Command::none()
            }
            Message::Panel(m) => self.panel.update(m).map(Message::Panel),
            Message::ReviewReceived(review) => {
                self.receive_review(review);
                Command::none()
            }
            // Intents are handled by the parent; nothing to do if they come
            // back around.
            Message::AddRequested(_) | Message::RemoveRequested(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let [info_area, panel_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(area);

        let [title_area, image_area, swatch_area, stock_area, shipping_area, details_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(info_area);

        let title = Paragraph::new(self.title()).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(title, title_area);

        let image =
            Paragraph::new(self.image()).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(image, image_area);

        self.swatches.view(frame, swatch_area);

        let stock = if self.in_stock() {
            Paragraph::new("In stock").style(Style::default().fg(Color::Green))
        } else {
            Paragraph::new("Out of stock").style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        };
        frame.render_widget(stock, stock_area);

        let shipping = Paragraph::new(format!("Shipping: {}", self.shipping()));
        frame.render_widget(shipping, shipping_area);

        if !self.details.is_empty() {
            let lines: Vec<Line> = self
                .details
                .iter()
                .map(|detail| {
                    Line::from(vec![Span::raw("• "), Span::raw(detail.as_str())])
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), details_area);
        }

        self.panel.view(frame, panel_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        match &self.review_feed {
            Some(feed) => vec![feed.subscription(Message::ReviewReceived)],
            None => vec![],
        }
    }
}
