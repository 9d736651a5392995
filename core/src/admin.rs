//! Admin edits on the config aggregate.
//!
//! Every edit returns the next [`AppConfig`]; the caller replaces and
//! persists the whole aggregate in one step.

use crate::auth::hash_password;
use crate::error::{AdminError, AdminResult};
use crate::links::override_key;
use crate::models::{AppConfig, ContactLinks, LinkOverride, ProductStyle, RequestStatus};

/// Replace a product's card style. A style with nothing set removes the
/// entry, same as [`reset_product_style`].
pub fn set_product_style(config: &AppConfig, product: &str, style: ProductStyle) -> AppConfig {
    let style = style.normalized();
    if style.is_empty() {
        return reset_product_style(config, product);
    }

    let mut next = config.clone();
    next.product_styles.insert(product.to_string(), style);
    next
}

/// Back to the default card look.
pub fn reset_product_style(config: &AppConfig, product: &str) -> AppConfig {
    let mut next = config.clone();
    next.product_styles.remove(product);
    next
}

pub fn set_contact_links(config: &AppConfig, links: ContactLinks) -> AppConfig {
    let mut next = config.clone();
    next.whatsapp_number = links.whatsapp_number.trim().to_string();
    next.discord_link = links.discord_link.trim().to_string();
    next.youtube_link = links.youtube_link.trim().to_string();
    next.facebook_link = links.facebook_link.trim().to_string();
    next
}

/// Set the purchase links for one product/duration. An override without
/// any usable link removes the key.
pub fn set_link_override(config: &AppConfig, product: &str, duration: &str, link: LinkOverride) -> AppConfig {
    if link.is_empty() {
        return remove_link_override(config, product, duration);
    }

    let mut next = config.clone();
    next.overrides.insert(override_key(product, duration), link);
    next
}

pub fn remove_link_override(config: &AppConfig, product: &str, duration: &str) -> AppConfig {
    let mut next = config.clone();
    next.overrides.remove(&override_key(product, duration));
    next
}

pub fn set_request_status(config: &AppConfig, id: i64, status: RequestStatus) -> AdminResult<AppConfig> {
    let mut next = config.clone();
    let request = next
        .requests
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(AdminError::RequestNotFound(id))?;
    request.status = status;
    Ok(next)
}

pub fn remove_request(config: &AppConfig, id: i64) -> AdminResult<AppConfig> {
    if config.request(id).is_none() {
        return Err(AdminError::RequestNotFound(id));
    }

    let mut next = config.clone();
    next.requests.retain(|r| r.id != id);
    Ok(next)
}

/// Replace the admin login. The password is stored as a salted hash.
pub fn change_credentials(config: &AppConfig, username: &str, password: &str) -> AdminResult<AppConfig> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AdminError::InvalidCredentials);
    }

    let mut next = config.clone();
    next.admin_auth.username = username.to_string();
    next.admin_auth.password = hash_password(password);
    log::info!("Admin credentials changed for '{}'", username);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::authenticate;
    use crate::default_config;
    use crate::links::{resolve_link, PaymentCategory};

    #[test]
    fn test_set_and_reset_style() {
        let config = default_config();
        let style = ProductStyle {
            bg_url: Some("https://img.example/bg.png".into()),
            icon_url: None,
            gradient: Some("bg-gradient-to-r from-pink-500 to-rose-500".into()),
        };

        let styled = set_product_style(&config, "Hake", style.clone());
        assert_eq!(styled.style_for("Hake"), Some(&style));

        let reset = reset_product_style(&styled, "Hake");
        assert!(reset.style_for("Hake").is_none());
    }

    #[test]
    fn test_blank_style_removes_entry() {
        let config = set_product_style(
            &default_config(),
            "Hake",
            ProductStyle {
                icon_url: Some("https://img.example/i.png".into()),
                ..ProductStyle::default()
            },
        );
        let cleared = set_product_style(
            &config,
            "Hake",
            ProductStyle {
                bg_url: Some(String::new()),
                icon_url: Some(" ".into()),
                gradient: None,
            },
        );
        assert!(cleared.product_styles.is_empty());
    }

    #[test]
    fn test_override_edit_changes_resolution() {
        let config = default_config();
        assert_eq!(
            resolve_link(&config.overrides, "Deadlock", "Lifetime", PaymentCategory::Crypto),
            None
        );

        let next = set_link_override(
            &config,
            "Deadlock",
            "Lifetime",
            LinkOverride::crypto("https://pay.example/deadlock-life"),
        );
        assert_eq!(
            resolve_link(&next.overrides, "Deadlock", "Lifetime", PaymentCategory::Crypto),
            Some("https://pay.example/deadlock-life")
        );

        let removed = set_link_override(&next, "Deadlock", "Lifetime", LinkOverride::default());
        assert!(!removed.overrides.contains_key("Deadlock_Lifetime"));
    }

    #[test]
    fn test_request_status_transitions() {
        let config = default_config();
        let id = config.requests[0].id;

        let done = set_request_status(&config, id, RequestStatus::Completed).unwrap();
        assert_eq!(done.request(id).unwrap().status, RequestStatus::Completed);
        assert_eq!(done.pending_requests().count(), 0);

        assert_eq!(
            set_request_status(&config, 1, RequestStatus::Completed),
            Err(AdminError::RequestNotFound(1))
        );

        let removed = remove_request(&done, id).unwrap();
        assert!(removed.requests.is_empty());
        assert!(remove_request(&removed, id).is_err());
    }

    #[test]
    fn test_change_credentials_writes_salted_hash() {
        let config = default_config();
        let next = change_credentials(&config, " owner ", "n3w-pass").unwrap();

        assert_eq!(next.admin_auth.username, "owner");
        assert!(next.admin_auth.password.starts_with("pbkdf2$"));
        assert!(authenticate(&next.admin_auth, "owner", "n3w-pass"));
        assert!(!authenticate(&next.admin_auth, "admin", "admin"));

        assert_eq!(
            change_credentials(&config, "owner", ""),
            Err(AdminError::InvalidCredentials)
        );
    }

    #[test]
    fn test_contact_links_are_trimmed() {
        let next = set_contact_links(
            &default_config(),
            ContactLinks {
                whatsapp_number: " 6281 ".into(),
                discord_link: "https://discord.gg/miuw".into(),
                youtube_link: "#".into(),
                facebook_link: "#".into(),
            },
        );
        assert_eq!(next.whatsapp_number, "6281");
        assert_eq!(next.contact_links().discord_link, "https://discord.gg/miuw");
    }
}
