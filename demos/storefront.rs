//! # Storefront Demo
//!
//! The full shopping-cart demo with direct review wiring: the form's
//! submission bubbles up through the review panel to the product display.
//!
//! Run with: `cargo run --example storefront`

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
        wiring: Wiring::Direct,
    }
}

#[vitrine::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    vitrine::run::<Storefront>(config()).await?;
    Ok(())
}
