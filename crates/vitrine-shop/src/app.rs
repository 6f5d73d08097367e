//! The application root: owns the cart and hosts the product display.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use vitrine_core::command::Command;
use vitrine_core::component::Component;
use vitrine_core::model::Model;
use vitrine_core::subscription::Subscription;
use vitrine_core::subscriptions::terminal_events;
use vitrine_core::TerminalEvent;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::product::{self, ProductDisplay, Wiring};

/// Startup configuration for the storefront.
///
/// `premium` and `details` never change after initialization.
pub struct StoreConfig {
    /// Brand shown in the product title.
    pub brand: String,
    /// Product name shown in the product title.
    pub product: String,
    /// The variant catalog.
    pub catalog: Catalog,
    /// Whether this account gets free shipping.
    pub premium: bool,
    /// Static product detail bullets.
    pub details: Vec<String>,
    /// Review delivery strategy.
    pub wiring: Wiring,
}

/// Messages for the storefront.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Product display messages (including bubbled child events).
    Product(product::Message),
    /// Exit the application.
    Quit,
}

/// The root model: the authoritative cart plus the product display.
///
/// Cart mutations happen only here, in response to the intents the product
/// raises; after each mutation the new cart length is mirrored back down for
/// display and remove-gating.
pub struct Storefront {
    product: ProductDisplay,
    cart: Cart,
}

impl Storefront {
    /// The cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The hosted product display.
    pub fn product(&self) -> &ProductDisplay {
        &self.product
    }
}

impl Model for Storefront {
    type Message = Msg;
    type Flags = StoreConfig;

    fn init(config: StoreConfig) -> (Self, Command<Msg>) {
        let product = ProductDisplay::new(
            config.brand,
            config.product,
            config.catalog,
            config.premium,
            config.details,
            config.wiring,
        );
        (
            Storefront {
                product,
                cart: Cart::new(),
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            // Cart intents are handled here; everything else is delegated.
            Msg::Product(product::Message::AddRequested(id)) => {
                self.cart.add(id);
                self.product.set_cart_count(self.cart.len());
                Command::none()
            }
            Msg::Product(product::Message::RemoveRequested(id)) => {
                self.cart.remove(id);
                self.product.set_cart_count(self.cart.len());
                Command::none()
            }
            Msg::Product(m) => self.product.update(m).map(Msg::Product),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let [header_area, main_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(area);

        let header = Paragraph::new("vitrine -- a tiny storefront")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(header, header_area);

        self.product.view(frame, main_area);

        let status = Paragraph::new(Line::from(vec![
            Span::styled("Cart: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{} item(s)", self.cart.len())),
        ]));
        frame.render_widget(status, status_area);

        let hints: Vec<Span> = if self.product.form_active() {
            vec![
                Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
                Span::raw(" field  "),
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" submit  "),
                Span::styled("Tab", Style::default().fg(Color::Cyan)),
                Span::raw(" tab  "),
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::raw(" quit"),
            ]
        } else {
            vec![
                Span::styled("←/→", Style::default().fg(Color::Cyan)),
                Span::raw(" variant  "),
                Span::styled("a", Style::default().fg(Color::Cyan)),
                Span::raw(" add  "),
                Span::styled("d", Style::default().fg(Color::Cyan)),
                Span::raw(" remove  "),
                Span::styled("Tab", Style::default().fg(Color::Cyan)),
                Span::raw(" tab  "),
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::raw(" quit"),
            ]
        };
        let help = Paragraph::new(Line::from(hints))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(help, help_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(|event| match event {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                _ => Some(Msg::Product(product::Message::KeyPress(key))),
            },
            _ => None,
        })];
        subs.extend(
            self.product
                .subscriptions()
                .into_iter()
                .map(|sub| sub.map(Msg::Product)),
        );
        subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Variant, VariantId};
    use crate::review::Rating;
    use crate::review_panel;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use vitrine_core::testing::TestProgram;

    fn config(wiring: Wiring) -> StoreConfig {
        StoreConfig {
            brand: "Sy Dinh".into(),
            product: "Socks".into(),
            catalog: Catalog::new(vec![
                Variant::new(1, "Green", "https://i.pravatar.cc/200?123", 0),
                Variant::new(2, "Red", "https://i.pravatar.cc/200?234", 9),
            ]),
            premium: true,
            details: vec!["Color red".into(), "80% Coton".into(), "For girl".into()],
            wiring,
        }
    }

    fn press(prog: &mut TestProgram<Storefront>, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        prog.send(Msg::Product(product::Message::KeyPress(key)));
        prog.drain_messages();
    }

    #[test]
    fn renders_title_shipping_and_empty_state() {
        let prog = TestProgram::<Storefront>::new(config(Wiring::Direct));
        let content = prog.render_string(100, 24);
        assert!(content.contains("Sy Dinh Socks"));
        assert!(content.contains("Shipping: Free"));
        assert!(content.contains("There are no reviews yet!"));
        assert!(content.contains("Cart: 0 item(s)"));
    }

    #[test]
    fn non_premium_shows_the_numeric_cost() {
        let mut cfg = config(Wiring::Direct);
        cfg.premium = false;
        let prog = TestProgram::<Storefront>::new(cfg);
        assert!(prog.render_string(100, 24).contains("Shipping: 2.99"));
    }

    #[test]
    fn adding_needs_an_in_stock_variant() {
        let mut prog = TestProgram::<Storefront>::new(config(Wiring::Direct));

        // Green (index 0) is out of stock: nothing happens.
        press(&mut prog, KeyCode::Char('a'));
        assert!(prog.model().cart().is_empty());

        // Switch to Red and add twice, remove once.
        press(&mut prog, KeyCode::Right);
        press(&mut prog, KeyCode::Char('a'));
        press(&mut prog, KeyCode::Char('a'));
        press(&mut prog, KeyCode::Char('d'));
        assert_eq!(prog.model().cart().items(), &[VariantId(2)]);
    }

    #[test]
    fn removing_from_an_empty_cart_is_silent() {
        let mut prog = TestProgram::<Storefront>::new(config(Wiring::Direct));
        prog.send(Msg::Product(product::Message::RemoveRequested(VariantId(
            99,
        ))));
        prog.drain_messages();
        assert!(prog.model().cart().is_empty());
    }

    #[test]
    fn review_submission_reaches_the_product_directly() {
        let mut prog = TestProgram::<Storefront>::new(config(Wiring::Direct));

        press(&mut prog, KeyCode::Tab);
        for c in "Ana".chars() {
            press(&mut prog, KeyCode::Char(c));
        }
        press(&mut prog, KeyCode::Down);
        for c in "Great socks".chars() {
            press(&mut prog, KeyCode::Char(c));
        }
        press(&mut prog, KeyCode::Down);
        press(&mut prog, KeyCode::Char('2'));
        press(&mut prog, KeyCode::Enter);

        let reviews = prog.model().product().reviews();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].name, "Ana");
        assert_eq!(reviews[0].body, "Great socks");
        assert_eq!(reviews[0].rating, Rating::Two);

        // Back on the list tab, the review renders.
        press(&mut prog, KeyCode::Tab);
        let content = prog.render_string(100, 24);
        assert!(content.contains("Ana"));
        assert!(content.contains("rated 2/3"));
    }

    #[test]
    fn failed_submission_renders_the_error_list() {
        let mut prog = TestProgram::<Storefront>::new(config(Wiring::Direct));
        press(&mut prog, KeyCode::Tab);
        press(&mut prog, KeyCode::Enter);

        let content = prog.render_string(100, 24);
        assert!(content.contains("Please, correct these errors!"));
        assert!(content.contains("Name required"));
        assert!(content.contains("Review required"));
        assert!(content.contains("Rating required"));
    }

    #[test]
    fn draft_survives_leaving_the_form_tab() {
        let mut prog = TestProgram::<Storefront>::new(config(Wiring::Direct));
        press(&mut prog, KeyCode::Tab);
        for c in "An".chars() {
            press(&mut prog, KeyCode::Char(c));
        }
        press(&mut prog, KeyCode::Tab);
        press(&mut prog, KeyCode::Tab);
        assert_eq!(prog.model().product().panel().form().draft().name, "An");
    }

    #[test]
    fn channel_wiring_delivers_via_the_feed_message() {
        let mut prog = TestProgram::<Storefront>::new(config(Wiring::Channel));

        // With a sink in place, a submit publishes instead of bubbling.
        press(&mut prog, KeyCode::Tab);
        for c in "Ana".chars() {
            press(&mut prog, KeyCode::Char(c));
        }
        press(&mut prog, KeyCode::Down);
        for c in "ok".chars() {
            press(&mut prog, KeyCode::Char(c));
        }
        press(&mut prog, KeyCode::Down);
        press(&mut prog, KeyCode::Char('1'));
        press(&mut prog, KeyCode::Enter);
        assert!(prog.model().product().reviews().is_empty());

        // The harness does not run subscriptions; deliver the published
        // review the way the channel subscription would.
        prog.send(Msg::Product(product::Message::ReviewReceived(
            crate::review::Review {
                name: "Ana".into(),
                body: "ok".into(),
                rating: Rating::One,
            },
        )));
        prog.drain_messages();
        assert_eq!(prog.model().product().reviews().len(), 1);
    }

    #[test]
    fn submitted_messages_from_the_panel_are_intercepted() {
        let mut prog = TestProgram::<Storefront>::new(config(Wiring::Direct));
        prog.send(Msg::Product(product::Message::Panel(
            review_panel::Message::Submitted(crate::review::Review {
                name: "Bea".into(),
                body: "fine".into(),
                rating: Rating::Three,
            }),
        )));
        prog.drain_messages();
        assert_eq!(prog.model().product().reviews().len(), 1);
    }

    #[test]
    fn quit_message_requests_exit() {
        let mut prog = TestProgram::<Storefront>::new(config(Wiring::Direct));
        prog.send(Msg::Quit);
        assert!(prog.quit_requested());
    }
}
