//! # Review Channel Demo
//!
//! The same storefront, wired through a scoped review channel instead of
//! direct message bubbling: the product display owns a broadcast channel,
//! the form publishes submissions into it, and the product consumes it as a
//! subscription. The channel lives and dies with the product -- there is no
//! process-wide bus.
//!
//! Run with: `cargo run --example review_channel`

use vitrine::shop::{Catalog, StoreConfig, Storefront, Variant, Wiring};

fn config() -> StoreConfig {
    StoreConfig {
        brand: "Sy Dinh".into(),
        product: "Socks".into(),
        catalog: Catalog::new(vec![
            Variant::new(1, "Green", "https://i.pravatar.cc/200?123", 0),
            Variant::new(2, "Red", "https://i.pravatar.cc/200?234", 9),
        ]),
        premium: true,
        details: vec!["Color red".into(), "80% Coton".into(), "For girl".into()],
        wiring: Wiring::Channel,
    }
}

#[vitrine::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    vitrine::run::<Storefront>(config()).await?;
    Ok(())
}
