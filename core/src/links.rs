//! Purchase-link resolution over the override table.
//!
//! The override table maps `"{product}_{duration}"` to a [`LinkOverride`].
//! A missing key or an empty field means "no link configured": callers get
//! `None` and render a disabled button, never an error.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::catalog::durations_for;
use crate::error::StoreError;
use crate::models::{link_value, AppConfig, LinkOverride};

/// How the customer wants to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentCategory {
    Crypto,
    Fiat,
    FiatWorld,
    FiatRegion,
}

impl PaymentCategory {
    pub const ALL: [PaymentCategory; 4] = [
        PaymentCategory::Crypto,
        PaymentCategory::Fiat,
        PaymentCategory::FiatWorld,
        PaymentCategory::FiatRegion,
    ];

    /// Wire name, as used in stored documents and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentCategory::Crypto => "crypto",
            PaymentCategory::Fiat => "fiat",
            PaymentCategory::FiatWorld => "fiat-world",
            PaymentCategory::FiatRegion => "fiat-region",
        }
    }

    /// Button label in the purchase dialog.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentCategory::Crypto => "Crypto",
            PaymentCategory::Fiat => "Card / E-Wallet",
            PaymentCategory::FiatWorld => "Card / E-Wallet (Worldwide)",
            PaymentCategory::FiatRegion => "Card / E-Wallet (Regional)",
        }
    }

    /// Regional categories fall back to the generic fiat link.
    pub fn is_regional(&self) -> bool {
        matches!(self, PaymentCategory::FiatWorld | PaymentCategory::FiatRegion)
    }
}

impl fmt::Display for PaymentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| StoreError::UnknownCategory(s.to_string()))
    }
}

/// Key into the override table.
pub fn override_key(product: &str, duration: &str) -> String {
    format!("{}_{}", product, duration)
}

fn field(link: &LinkOverride, category: PaymentCategory) -> Option<&str> {
    match category {
        PaymentCategory::Crypto => link_value(&link.crypto),
        PaymentCategory::Fiat => link_value(&link.fiat),
        PaymentCategory::FiatWorld => link_value(&link.fiat_world),
        PaymentCategory::FiatRegion => link_value(&link.fiat_region),
    }
}

/// Outbound link for a product, duration and payment category.
///
/// Regional categories fall back to `fiat` when their own field is empty
/// or absent. URLs are returned as stored, without validation.
pub fn resolve_link<'a>(
    overrides: &'a BTreeMap<String, LinkOverride>,
    product: &str,
    duration: &str,
    category: PaymentCategory,
) -> Option<&'a str> {
    let link = overrides.get(&override_key(product, duration))?;

    field(link, category).or_else(|| {
        if category.is_regional() {
            field(link, PaymentCategory::Fiat)
        } else {
            None
        }
    })
}

/// Categories the purchase dialog offers for one key.
///
/// Crypto always comes first. A key with any regional link offers the
/// worldwide/regional pair; otherwise the single generic fiat option.
pub fn available_categories(
    overrides: &BTreeMap<String, LinkOverride>,
    product: &str,
    duration: &str,
) -> Vec<PaymentCategory> {
    let regional = overrides
        .get(&override_key(product, duration))
        .map(|link| {
            field(link, PaymentCategory::FiatWorld).is_some()
                || field(link, PaymentCategory::FiatRegion).is_some()
        })
        .unwrap_or(false);

    if regional {
        vec![
            PaymentCategory::Crypto,
            PaymentCategory::FiatWorld,
            PaymentCategory::FiatRegion,
        ]
    } else {
        vec![PaymentCategory::Crypto, PaymentCategory::Fiat]
    }
}

/// One payment button of the purchase dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentLink {
    pub category: PaymentCategory,
    /// `None` renders as a disabled button.
    pub url: Option<String>,
}

/// One duration row of the purchase dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOption {
    pub duration: String,
    pub links: Vec<PaymentLink>,
}

impl PurchaseOption {
    /// True when at least one button leads somewhere.
    pub fn is_purchasable(&self) -> bool {
        self.links.iter().any(|link| link.url.is_some())
    }
}

/// Every duration of `product` with its resolved payment links.
pub fn purchase_options(config: &AppConfig, product: &str) -> Vec<PurchaseOption> {
    durations_for(product)
        .iter()
        .map(|duration| {
            let links = available_categories(&config.overrides, product, duration)
                .into_iter()
                .map(|category| PaymentLink {
                    category,
                    url: resolve_link(&config.overrides, product, duration, category)
                        .map(str::to_string),
                })
                .collect();

            PurchaseOption {
                duration: duration.to_string(),
                links,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_config;

    fn table() -> BTreeMap<String, LinkOverride> {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            override_key("Melonity", "1 Day"),
            LinkOverride::crypto("https://c.example/1").with_fiat("https://f.example/1"),
        );
        overrides.insert(
            override_key("Melonity", "7 Days"),
            LinkOverride::crypto("https://c.example/7")
                .with_fiat("https://f.example/7")
                .with_regional("", "https://region.example/7"),
        );
        overrides
    }

    #[test]
    fn test_resolve_crypto_link() {
        let overrides = table();
        assert_eq!(
            resolve_link(&overrides, "Melonity", "1 Day", PaymentCategory::Crypto),
            Some("https://c.example/1")
        );
    }

    #[test]
    fn test_unknown_key_resolves_to_none() {
        let overrides = table();
        assert_eq!(
            resolve_link(&overrides, "Melonity", "999 Days", PaymentCategory::Crypto),
            None
        );
        assert_eq!(resolve_link(&overrides, "", "", PaymentCategory::Fiat), None);
    }

    #[test]
    fn test_regional_falls_back_to_fiat() {
        let overrides = table();
        // absent field
        assert_eq!(
            resolve_link(&overrides, "Melonity", "1 Day", PaymentCategory::FiatRegion),
            Some("https://f.example/1")
        );
        // empty field
        assert_eq!(
            resolve_link(&overrides, "Melonity", "7 Days", PaymentCategory::FiatWorld),
            Some("https://f.example/7")
        );
        // own field wins
        assert_eq!(
            resolve_link(&overrides, "Melonity", "7 Days", PaymentCategory::FiatRegion),
            Some("https://region.example/7")
        );
    }

    #[test]
    fn test_generic_fiat_does_not_fall_back() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            override_key("Hake", "1 Day"),
            LinkOverride::crypto("https://c.example/h").with_fiat(""),
        );
        assert_eq!(resolve_link(&overrides, "Hake", "1 Day", PaymentCategory::Fiat), None);
        assert_eq!(
            resolve_link(&overrides, "Hake", "1 Day", PaymentCategory::FiatWorld),
            None
        );
    }

    #[test]
    fn test_key_is_plain_concatenation() {
        assert_eq!(override_key("DotaAccount", "Ranked Ready"), "DotaAccount_Ranked Ready");
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!("fiat-world".parse::<PaymentCategory>().unwrap(), PaymentCategory::FiatWorld);
        assert!("paypal".parse::<PaymentCategory>().is_err());
        assert_eq!(PaymentCategory::FiatRegion.to_string(), "fiat-region");
    }

    #[test]
    fn test_available_categories() {
        let config = default_config();
        assert_eq!(
            available_categories(&config.overrides, "Melonity", "30 Days"),
            vec![
                PaymentCategory::Crypto,
                PaymentCategory::FiatWorld,
                PaymentCategory::FiatRegion
            ]
        );
        // regional fields present but empty
        assert_eq!(
            available_categories(&config.overrides, "Melonity", "Lifetime"),
            vec![PaymentCategory::Crypto, PaymentCategory::Fiat]
        );
        assert_eq!(
            available_categories(&config.overrides, "Nope", "1 Day"),
            vec![PaymentCategory::Crypto, PaymentCategory::Fiat]
        );
    }

    #[test]
    fn test_purchase_options_degrade_gracefully() {
        let config = default_config();
        let options = purchase_options(&config, "Deadlock");
        assert_eq!(options.len(), 7);

        let lifetime = options.iter().find(|o| o.duration == "Lifetime").unwrap();
        assert!(!lifetime.is_purchasable());

        let day = &options[0];
        assert_eq!(day.duration, "1 Day");
        assert!(day.links.iter().all(|link| link.url.is_some()));
    }
}
