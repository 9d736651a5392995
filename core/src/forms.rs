//! Public form submissions: customer reviews and config requests.
//!
//! Each submission validates its draft and returns the next config
//! aggregate with exactly one record appended. A rejected draft leaves the
//! caller's config untouched.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::catalog::{is_known_product, PRODUCTS};
use crate::error::{FormError, FormResult};
use crate::models::{AppConfig, RequestConfig, RequestStatus, Review};

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// Review form contents. `rating == 0` means no star was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub product: String,
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            product: PRODUCTS[0].to_string(),
            rating: 0,
            comment: String::new(),
        }
    }
}

impl ReviewDraft {
    pub fn validate(&self) -> FormResult<()> {
        if self.rating == 0 {
            return Err(FormError::MissingRating);
        }
        if self.rating > MAX_RATING {
            return Err(FormError::RatingOutOfRange(self.rating));
        }
        if is_blank(&self.name) || is_blank(&self.comment) {
            return Err(FormError::MissingFields);
        }
        check_product(&self.product)
    }
}

/// Config request form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    pub product: String,
    /// Discord handle.
    pub discord: String,
    pub order_id: String,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            product: PRODUCTS[0].to_string(),
            discord: String::new(),
            order_id: String::new(),
        }
    }
}

impl RequestDraft {
    pub fn validate(&self) -> FormResult<()> {
        if is_blank(&self.discord) || is_blank(&self.order_id) {
            return Err(FormError::MissingFields);
        }
        check_product(&self.product)
    }
}

/// Whitespace-only input counts as blank; accepted text is stored trimmed.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_product(product: &str) -> FormResult<()> {
    if is_known_product(product) {
        Ok(())
    } else {
        Err(FormError::UnknownProduct(product.to_string()))
    }
}

/// Millisecond-timestamp id, bumped past every existing review and
/// request id so two submissions in the same millisecond stay distinct.
///
/// Fails with [`FormError::IdsExhausted`] when a stored id is already
/// `i64::MAX`.
pub fn next_id(config: &AppConfig, now: DateTime<Utc>) -> FormResult<i64> {
    let highest = config
        .reviews
        .iter()
        .map(|r| r.id)
        .chain(config.requests.iter().map(|r| r.id))
        .max();

    match highest {
        Some(id) if id >= now.timestamp_millis() => id.checked_add(1).ok_or(FormError::IdsExhausted),
        _ => Ok(now.timestamp_millis()),
    }
}

/// ISO-8601 timestamp with milliseconds and `Z`, e.g. `2026-02-09T07:45:00.000Z`.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Append a review built from `draft`.
pub fn submit_review(config: &AppConfig, draft: &ReviewDraft, now: DateTime<Utc>) -> FormResult<AppConfig> {
    draft.validate()?;

    let review = Review {
        id: next_id(config, now)?,
        name: draft.name.trim().to_string(),
        product: draft.product.clone(),
        rating: draft.rating,
        comment: draft.comment.trim().to_string(),
        created_at: iso_timestamp(now),
    };
    log::info!("New {}-star review for {}", review.rating, review.product);

    let mut next = config.clone();
    next.reviews.push(review);
    Ok(next)
}

/// Append a pending config request built from `draft`.
pub fn submit_request(config: &AppConfig, draft: &RequestDraft, now: DateTime<Utc>) -> FormResult<AppConfig> {
    draft.validate()?;

    let request = RequestConfig {
        id: next_id(config, now)?,
        product: draft.product.clone(),
        discord: draft.discord.trim().to_string(),
        order_id: draft.order_id.trim().to_string(),
        status: RequestStatus::Pending,
    };
    log::info!("New config request {} for {}", request.id, request.product);

    let mut next = config.clone();
    next.requests.push(request);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_config;
    use crate::store::{ConfigStore, MemoryStorage, StorageBackend, STORAGE_KEY};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 30, 5).unwrap()
    }

    fn review(rating: u8) -> ReviewDraft {
        ReviewDraft {
            name: "JohnDota".into(),
            product: "Hake".into(),
            rating,
            comment: "Works great".into(),
        }
    }

    #[test]
    fn test_zero_rating_is_rejected() {
        let config = default_config();
        assert_eq!(
            submit_review(&config, &review(0), now()),
            Err(FormError::MissingRating)
        );
        assert_eq!(
            submit_review(&config, &review(6), now()),
            Err(FormError::RatingOutOfRange(6))
        );
    }

    #[test]
    fn test_valid_review_appends_exactly_one() {
        let config = default_config();
        let next = submit_review(&config, &review(4), now()).unwrap();

        assert_eq!(next.reviews.len(), config.reviews.len() + 1);
        let added = next.reviews.last().unwrap();
        assert_eq!(added.rating, 4);
        assert_eq!(added.product, "Hake");
        assert_eq!(added.created_at, "2026-10-17T12:30:05.000Z");
        assert!(config.reviews.iter().all(|r| r.id != added.id));
        // everything else untouched
        assert_eq!(next.requests, config.requests);
    }

    #[test]
    fn test_blank_review_fields_are_rejected() {
        let config = default_config();
        let mut draft = review(5);
        draft.comment = "   ".into();
        assert_eq!(submit_review(&config, &draft, now()), Err(FormError::MissingFields));

        let mut draft = review(5);
        draft.name.clear();
        assert_eq!(submit_review(&config, &draft, now()), Err(FormError::MissingFields));
    }

    #[test]
    fn test_same_millisecond_submissions_get_distinct_ids() {
        let config = default_config();
        let first = submit_review(&config, &review(5), now()).unwrap();
        let second = submit_review(&first, &review(3), now()).unwrap();
        let ids: Vec<i64> = second.reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids[2] + 1, ids[3]);
    }

    #[test]
    fn test_empty_contact_handle_is_rejected_without_mutation() {
        let config = default_config();
        let draft = RequestDraft {
            product: "Umbrella".into(),
            discord: String::new(),
            order_id: "ORD-1".into(),
        };
        assert_eq!(submit_request(&config, &draft, now()), Err(FormError::MissingFields));
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_valid_request_is_pending() {
        let config = default_config();
        let draft = RequestDraft {
            product: "Divine".into(),
            discord: " user#0001 ".into(),
            order_id: "ORD-7".into(),
        };
        let next = submit_request(&config, &draft, now()).unwrap();
        let added = next.requests.last().unwrap();
        assert_eq!(added.status, RequestStatus::Pending);
        assert_eq!(added.discord, "user#0001");
        assert_eq!(added.id, now().timestamp_millis());
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let config = default_config();
        let draft = RequestDraft {
            product: "Fortnite".into(),
            discord: "user".into(),
            order_id: "1".into(),
        };
        assert_eq!(
            submit_request(&config, &draft, now()),
            Err(FormError::UnknownProduct("Fortnite".into()))
        );
    }

    #[test]
    fn test_maximal_stored_id_is_rejected_not_wrapped() {
        let backend = MemoryStorage::new();
        let mut stored = default_config();
        stored.requests[0].id = i64::MAX;
        backend
            .set(STORAGE_KEY, &serde_json::to_string(&stored).unwrap())
            .unwrap();
        let config = ConfigStore::new(backend).load();

        assert_eq!(submit_review(&config, &review(5), now()), Err(FormError::IdsExhausted));
        let draft = RequestDraft {
            product: "Hake".into(),
            discord: "user".into(),
            order_id: "ORD-9".into(),
        };
        assert_eq!(submit_request(&config, &draft, now()), Err(FormError::IdsExhausted));
        assert_eq!(next_id(&default_config(), now()), Ok(now().timestamp_millis()));
    }
}
