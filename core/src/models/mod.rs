//! Domain models for the storefront config aggregate.
//!
//! - [`AppConfig`] - the single persisted document
//! - [`Review`] - a customer review
//! - [`RequestConfig`] - a config request and its [`RequestStatus`]
//! - [`ProductStyle`] - per-product card styling
//! - [`LinkOverride`] - outbound purchase links for one product/duration
//! - [`AdminAuth`] - admin username and stored credential
//!
//! Field names serialize in camelCase so the JSON matches the document the
//! browser stores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Reviews
// =============================================================================

/// A customer review. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub product: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    /// ISO-8601 UTC timestamp, e.g. `2026-02-09T07:45:00.000Z`.
    pub created_at: String,
}

// =============================================================================
// Config Requests
// =============================================================================

/// Lifecycle of a config request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Completed => "completed",
        }
    }
}

/// A request for a product configuration, filed from the public form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfig {
    pub id: i64,
    pub product: String,
    /// Discord handle to contact the customer.
    pub discord: String,
    /// External order identifier.
    pub order_id: String,
    pub status: RequestStatus,
}

// =============================================================================
// Product Styles
// =============================================================================

/// Optional card styling for one product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// CSS gradient class list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
}

impl ProductStyle {
    /// Drop blank fields so they fall back to the default look.
    pub fn normalized(self) -> Self {
        Self {
            bg_url: non_blank(self.bg_url),
            icon_url: non_blank(self.icon_url),
            gradient: non_blank(self.gradient),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bg_url.is_none() && self.icon_url.is_none() && self.gradient.is_none()
    }
}

// =============================================================================
// Link Overrides
// =============================================================================

/// Outbound purchase links for one `product_duration` key.
///
/// Stored documents use empty strings as well as missing fields to mean
/// "no link"; both are treated as absent on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiat_world: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiat_region: Option<String>,
}

impl LinkOverride {
    pub fn crypto(url: impl Into<String>) -> Self {
        Self {
            crypto: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_fiat(mut self, url: impl Into<String>) -> Self {
        self.fiat = Some(url.into());
        self
    }

    pub fn with_regional(mut self, world: impl Into<String>, region: impl Into<String>) -> Self {
        self.fiat_world = Some(world.into());
        self.fiat_region = Some(region.into());
        self
    }

    /// True when no field carries a usable link.
    pub fn is_empty(&self) -> bool {
        [&self.crypto, &self.fiat, &self.fiat_world, &self.fiat_region]
            .iter()
            .all(|field| link_value(field).is_none())
    }
}

/// A link field's value, treating empty strings as absent.
pub(crate) fn link_value(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|url| !url.is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// Admin Auth
// =============================================================================

/// Admin username and stored credential string.
///
/// `password` holds either a legacy rolling-hash value or a salted
/// `pbkdf2$...` credential; see [`crate::auth::Credential`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAuth {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Contact Links
// =============================================================================

/// The contact fields of [`AppConfig`], edited together in the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactLinks {
    pub whatsapp_number: String,
    pub discord_link: String,
    pub youtube_link: String,
    pub facebook_link: String,
}

// =============================================================================
// App Config
// =============================================================================

/// The config aggregate: all mutable store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub whatsapp_number: String,
    pub discord_link: String,
    pub youtube_link: String,
    pub facebook_link: String,
    pub reviews: Vec<Review>,
    pub requests: Vec<RequestConfig>,
    pub product_styles: BTreeMap<String, ProductStyle>,
    pub overrides: BTreeMap<String, LinkOverride>,
    pub admin_auth: AdminAuth,
}

impl AppConfig {
    pub fn contact_links(&self) -> ContactLinks {
        ContactLinks {
            whatsapp_number: self.whatsapp_number.clone(),
            discord_link: self.discord_link.clone(),
            youtube_link: self.youtube_link.clone(),
            facebook_link: self.facebook_link.clone(),
        }
    }

    /// WhatsApp deep link for the support button.
    pub fn whatsapp_url(&self) -> String {
        let digits: String = self
            .whatsapp_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        format!("https://wa.me/{}", digits)
    }

    pub fn style_for(&self, product: &str) -> Option<&ProductStyle> {
        self.product_styles.get(product)
    }

    pub fn request(&self, id: i64) -> Option<&RequestConfig> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn pending_requests(&self) -> impl Iterator<Item = &RequestConfig> {
        self.requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_serializes_camel_case() {
        let review = Review {
            id: 1,
            name: "Alex".into(),
            product: "Melonity".into(),
            rating: 5,
            comment: "ok".into(),
            created_at: "2026-02-09T07:45:00.000Z".into(),
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["createdAt"], "2026-02-09T07:45:00.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_request_status_wire_names() {
        let json = r#"{"id":3,"product":"Umbrella","discord":"dda","orderId":"x","status":"pending"}"#;
        let request: RequestConfig = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.order_id, "x");

        let completed = serde_json::to_string(&RequestStatus::Completed).unwrap();
        assert_eq!(completed, "\"completed\"");
    }

    #[test]
    fn test_link_override_treats_empty_strings_as_absent() {
        let json = r#"{"crypto":"","fiatWorld":"","fiatRegion":""}"#;
        let link: LinkOverride = serde_json::from_str(json).unwrap();
        assert!(link.is_empty());
        assert!(!LinkOverride::crypto("https://pay.example").is_empty());
    }

    #[test]
    fn test_product_style_normalized() {
        let style = ProductStyle {
            bg_url: Some("  ".into()),
            icon_url: Some("https://img.example/icon.png".into()),
            gradient: Some(String::new()),
        }
        .normalized();
        assert_eq!(style.bg_url, None);
        assert_eq!(style.gradient, None);
        assert!(!style.is_empty());
    }

    #[test]
    fn test_whatsapp_url_strips_formatting() {
        let mut config = crate::default_config();
        config.whatsapp_number = "+62 812-3456".into();
        assert_eq!(config.whatsapp_url(), "https://wa.me/628123456");
    }
}
