//! Built-in configuration used on first start and whenever the stored
//! document is missing or unreadable.

use std::collections::BTreeMap;

use crate::links::override_key;
use crate::models::{AdminAuth, AppConfig, LinkOverride, RequestConfig, RequestStatus, Review};

/// Default admin username.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Legacy rolling hash of the default password `admin`.
pub const DEFAULT_ADMIN_HASH: &str = "92668751";

const SELLY: &str = "https://miuwmiaw.selly.store/product/";
const G2G: &str = "https://www.g2g.com/id/categories/";

/// `(product, duration, crypto id, generic fiat)`.
///
/// The crypto link is `SELLY + id`; an empty fiat string keeps the field
/// present but unusable, as in the shipped document.
const GENERIC_FIAT: &[(&str, &str, &str, &str)] = &[
    ("Umbrella", "1 Day", "2234bbc8", "steam-wallet-gift-cards/offer/G1742351148823NQ"),
    ("Umbrella", "7 Days", "b467998d", "steam-wallet-gift-cards/offer/G1742352243538IM"),
    ("Umbrella", "14 Days", "98a0067e", "steam-wallet-gift-cards/offer/G1742352284244IK"),
    ("Umbrella", "30 Days", "41241060", "steam-wallet-gift-cards/offer/G1742352453710CO"),
    ("Umbrella", "90 Days", "1fbde5b9", "steam-wallet-gift-cards/offer/G1742352500701ZP"),
    ("Umbrella", "180 Days", "31639c3d", "steam-wallet-gift-cards/offer/G1742352538771DA"),
    ("Divine", "7 Days", "9311233a", ""),
    ("Divine", "14 Days", "da249fd1", ""),
    ("Divine", "30 Days", "b083a428", ""),
    ("Hake", "1 Day", "8eda7015", ""),
    ("Hake", "7 Days", "07bae9de", ""),
    ("Hake", "30 Days", "1a29221d", ""),
    ("Hake", "90 Days", "6a365511", ""),
    ("Hake", "180 Days", "c66fdd54", ""),
    ("Deadlock", "1 Day", "259b8111", "razer-gold-gift-cards/offer/G1757596810504MR"),
    ("Deadlock", "7 Days", "4ec23486", "razer-gold-gift-cards/offer/G1757596885512IK"),
    ("Deadlock", "14 Days", "f7ab11f4", ""),
    ("Deadlock", "30 Days", "5e617c49", "razer-gold-gift-cards/offer/G1757596285259BU"),
    ("Deadlock", "90 Days", "a6c4976d", ""),
    ("Deadlock", "180 Days", "ecfdbc7f", ""),
    ("DotaAccount", "Ranked Ready", "7864c0a9", ""),
    ("DotaAccount", "TBD Rank Open", "21419568", ""),
];

/// `(duration, crypto id, fiat-world path, fiat-region path)` for Melonity.
const MELONITY_REGIONAL: &[(&str, &str, &str, &str)] = &[
    (
        "1 Day",
        "d644f53e",
        "googleplay-gift-cards/offer/G1698968074496BQ",
        "steam-wallet-gift-cards/offer/G1742351230820HS",
    ),
    (
        "7 Days",
        "76fede99",
        "googleplay-gift-cards/offer/G1699109587459FC",
        "apple-gift-cards/offer/G1717723368372DM",
    ),
    (
        "30 Days",
        "6f9eac19",
        "googleplay-gift-cards/offer/G1700141375815IA",
        "apple-gift-cards/offer/G1717723498651DJ",
    ),
    (
        "90 Days",
        "b91bf4c0",
        "googleplay-gift-cards/offer/G1713535193447VM",
        "apple-gift-cards/offer/G1717723587036MZ",
    ),
    (
        "180 Days",
        "d4534267",
        "googleplay-gift-cards/offer/G1698969341766RS",
        "apple-gift-cards/offer/G1717723658755UV",
    ),
];

fn g2g(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("{}{}", G2G, path)
    }
}

fn default_overrides() -> BTreeMap<String, LinkOverride> {
    let mut overrides = BTreeMap::new();

    for (duration, crypto, world, region) in MELONITY_REGIONAL {
        overrides.insert(
            override_key("Melonity", duration),
            LinkOverride::crypto(format!("{}{}", SELLY, crypto)).with_regional(g2g(world), g2g(region)),
        );
    }
    overrides.insert(
        override_key("Melonity", "Lifetime"),
        LinkOverride::crypto(format!("{}a1ec55d7", SELLY)).with_regional("", ""),
    );

    for (product, duration, crypto, fiat) in GENERIC_FIAT {
        overrides.insert(
            override_key(product, duration),
            LinkOverride::crypto(format!("{}{}", SELLY, crypto)).with_fiat(g2g(fiat)),
        );
    }

    // Lifetime is sold through the same storefront page for both categories
    let umbrella_lifetime = format!("{}f65a6299", SELLY);
    overrides.insert(
        override_key("Umbrella", "Lifetime"),
        LinkOverride::crypto(umbrella_lifetime.clone()).with_fiat(umbrella_lifetime),
    );

    overrides
}

/// The configuration shipped with the store.
pub fn default_config() -> AppConfig {
    AppConfig {
        whatsapp_number: "62".to_string(),
        discord_link: "https://discord.gg/example".to_string(),
        youtube_link: "#".to_string(),
        facebook_link: "#".to_string(),
        reviews: vec![
            Review {
                id: 1_700_000_000_001,
                name: "Alex".to_string(),
                product: "Melonity".to_string(),
                rating: 5,
                comment: "Best script ever, very safe and easy to use!".to_string(),
                created_at: "2026-02-09T07:45:00.000Z".to_string(),
            },
            Review {
                id: 1_700_000_000_002,
                name: "DendiFromPudge".to_string(),
                product: "Umbrella".to_string(),
                rating: 4,
                comment: "Good functionality but needs better documentation. Support is helpful though."
                    .to_string(),
                created_at: "2026-02-09T07:46:00.000Z".to_string(),
            },
        ],
        requests: vec![RequestConfig {
            id: 1_700_000_000_003,
            product: "Umbrella".to_string(),
            discord: "dda".to_string(),
            order_id: "dafasfasf".to_string(),
            status: RequestStatus::Pending,
        }],
        product_styles: BTreeMap::new(),
        overrides: default_overrides(),
        admin_auth: AdminAuth {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_HASH.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{durations_for, PRODUCTS};

    #[test]
    fn test_default_overrides_cover_catalog() {
        let config = default_config();
        assert_eq!(config.overrides.len(), 29);

        for product in PRODUCTS {
            for duration in durations_for(product) {
                let key = override_key(product, duration);
                // Deadlock Lifetime is listed but has no link configured
                if key == "Deadlock_Lifetime" {
                    assert!(!config.overrides.contains_key(&key));
                } else {
                    assert!(config.overrides.contains_key(&key), "missing {key}");
                }
            }
        }
    }

    #[test]
    fn test_default_links_are_full_urls() {
        let config = default_config();
        let melonity = &config.overrides["Melonity_7 Days"];
        assert_eq!(
            melonity.crypto.as_deref(),
            Some("https://miuwmiaw.selly.store/product/76fede99")
        );
        assert_eq!(
            melonity.fiat_region.as_deref(),
            Some("https://www.g2g.com/id/categories/apple-gift-cards/offer/G1717723368372DM")
        );
        assert_eq!(config.overrides["Hake_1 Day"].fiat.as_deref(), Some(""));
    }

    #[test]
    fn test_default_seed_data() {
        let config = default_config();
        assert_eq!(config.reviews.len(), 2);
        assert_eq!(config.requests.len(), 1);
        assert!(config.product_styles.is_empty());
        assert_eq!(config.admin_auth.username, "admin");
    }
}
