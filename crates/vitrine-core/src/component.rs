use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) with one difference: its
/// [`view`](Component::view) receives an `area: Rect`, so a parent decides
/// *where* each child renders by handing it a sub-region of the frame.
///
/// # Composition pattern
///
/// Wrap the child's message type in a variant of the parent message and lift
/// child commands with [`Command::map`]:
///
/// ```rust,ignore
/// enum Msg {
///     Picker(choice::Message),
/// }
///
/// fn update(&mut self, msg: Msg) -> Command<Msg> {
///     match msg {
///         Msg::Picker(m) => self.picker.update(m).map(Msg::Picker),
///     }
/// }
/// ```
///
/// A parent may also intercept specific child messages before (or instead
/// of) delegating -- that is how child "events" propagate upward: the child
/// returns `Command::message(...)` with one of its own variants, the command
/// is mapped into the parent's message space, and the parent pattern-matches
/// on the wrapped variant when it comes back through `update`.
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message
    /// variants so events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`].
    ///
    /// Works exactly like [`Model::update`](crate::Model::update); the
    /// parent calls [`.map()`](Command::map) on the result.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The parent is responsible for collecting child subscriptions and
    /// including them in its own
    /// [`Model::subscriptions`](crate::Model::subscriptions) return value,
    /// mapping messages appropriately.
    ///
    /// The default implementation returns an empty list.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has focus.
    ///
    /// A hint for input routing: parents query `focused()` to decide which
    /// child receives keyboard events. Defaults to `false`.
    fn focused(&self) -> bool {
        false
    }
}
