//! Storefront domain for **vitrine**.
//!
//! The shopping-cart demo proper: catalog and cart types, review records and
//! validation, and the components that present them -- a product display, a
//! tabbed review panel, and a review submission form -- topped by the
//! [`Storefront`](app::Storefront) root model.
//!
//! State flows down (catalog, premium flag, details, mirrored cart length)
//! and intents flow up (cart add/remove requests, submitted reviews), either
//! directly through the component hierarchy or over a scoped review channel
//! -- see [`product::Wiring`].
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`app`] | `Storefront` root model and configuration |
//! | [`cart`] | The cart: ordered variant-id references |
//! | [`catalog`] | Variants, the catalog, shipping |
//! | [`product`] | Product display component |
//! | [`review`] | Review records, ratings, validation |
//! | [`review_form`] | Review submission form component |
//! | [`review_panel`] | Tabbed review panel component |

pub mod app;
pub mod cart;
pub mod catalog;
pub mod product;
pub mod review;
pub mod review_form;
pub mod review_panel;

pub use app::{Msg, StoreConfig, Storefront};
pub use cart::Cart;
pub use catalog::{Catalog, Shipping, Variant, VariantId};
pub use product::{ProductDisplay, Wiring};
pub use review::{Rating, Review, ReviewDraft, ValidationError};
pub use review_form::ReviewForm;
pub use review_panel::ReviewPanel;
