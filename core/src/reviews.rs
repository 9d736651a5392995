//! Review listing helpers for the testimonials section.

use crate::models::{AppConfig, Review};

/// Count and average rating over a set of reviews.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewSummary {
    pub count: usize,
    /// `0.0` when there are no reviews.
    pub average: f64,
}

impl ReviewSummary {
    pub fn from_reviews<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        let (count, total) = reviews
            .into_iter()
            .fold((0usize, 0u32), |(n, sum), r| (n + 1, sum + u32::from(r.rating)));

        let average = if count == 0 {
            0.0
        } else {
            f64::from(total) / count as f64
        };
        Self { count, average }
    }

    /// Average rounded to one decimal for display, e.g. `4.5`.
    pub fn display_average(&self) -> String {
        format!("{:.1}", self.average)
    }
}

/// Newest first. Timestamps are ISO-8601 so they sort lexically; ids break ties.
pub fn recent_reviews(config: &AppConfig, limit: usize) -> Vec<Review> {
    let mut reviews = config.reviews.clone();
    reviews.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    reviews.truncate(limit);
    reviews
}

pub fn reviews_for<'a>(config: &'a AppConfig, product: &'a str) -> impl Iterator<Item = &'a Review> {
    config.reviews.iter().filter(move |r| r.product == product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_config;

    #[test]
    fn test_summary_of_defaults() {
        let config = default_config();
        let summary = ReviewSummary::from_reviews(&config.reviews);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.display_average(), "4.5");
    }

    #[test]
    fn test_empty_summary() {
        let summary = ReviewSummary::from_reviews(Vec::<Review>::new().iter());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, 0.0);
    }

    #[test]
    fn test_recent_reviews_newest_first() {
        let config = default_config();
        let recent = recent_reviews(&config, 1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].name, "DendiFromPudge");
        assert_eq!(reviews_for(&config, "Melonity").count(), 1);
    }
}
