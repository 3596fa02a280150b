//! Aggregate statistics over the review collection.

use crate::core::types::Review;

/// Number of most recent reviews included in a report.
pub const RECENT_LIMIT: usize = 3;

/// Result of [`summarize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Summary<'a> {
    /// No reviews exist; there is nothing to average.
    Empty,
    Report(ReviewReport<'a>),
}

/// Aggregates for a non-empty review collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewReport<'a> {
    pub total: usize,
    /// Unrounded mean of every rating.
    pub overall_average: f64,
    /// One entry per product, in order of first appearance.
    pub products: Vec<ProductAverage>,
    /// Trailing reviews in insertion order (oldest first).
    pub recent: &'a [Review],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductAverage {
    pub product: String,
    pub average: f64,
}

/// Summarize reviews, keeping the last [`RECENT_LIMIT`] as recent.
pub fn summarize(reviews: &[Review]) -> Summary<'_> {
    summarize_with(reviews, RECENT_LIMIT)
}

/// Summarize reviews with an explicit recent-review limit.
pub fn summarize_with(reviews: &[Review], recent_limit: usize) -> Summary<'_> {
    if reviews.is_empty() {
        return Summary::Empty;
    }

    let total = reviews.len();
    let overall_average = mean(reviews.iter().map(|review| review.rating));

    // (product, rating sum, count) in first-appearance order.
    let mut groups: Vec<(&str, u64, usize)> = Vec::new();
    for review in reviews {
        match groups
            .iter_mut()
            .find(|(product, _, _)| *product == review.product)
        {
            Some(group) => {
                group.1 += u64::from(review.rating);
                group.2 += 1;
            }
            None => groups.push((review.product.as_str(), u64::from(review.rating), 1)),
        }
    }
    let products = groups
        .into_iter()
        .map(|(product, sum, count)| ProductAverage {
            product: product.to_string(),
            average: sum as f64 / count as f64,
        })
        .collect();

    let recent = &reviews[total.saturating_sub(recent_limit)..];

    Summary::Report(ReviewReport {
        total,
        overall_average,
        products,
        recent,
    })
}

fn mean(ratings: impl Iterator<Item = u8>) -> f64 {
    let (sum, count) = ratings.fold((0u64, 0usize), |(sum, count), rating| {
        (sum + u64::from(rating), count + 1)
    });
    sum as f64 / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::review;

    fn report(summary: Summary<'_>) -> ReviewReport<'_> {
        match summary {
            Summary::Report(report) => report,
            Summary::Empty => panic!("expected report"),
        }
    }

    fn mixed_reviews() -> Vec<Review> {
        vec![
            review(1, 1, "A", 5, "one"),
            review(2, 1, "A", 4, "two"),
            review(3, 2, "B", 5, "three"),
            review(4, 3, "C", 3, "four"),
            review(5, 3, "C", 5, "five"),
            review(6, 3, "C", 4, "six"),
        ]
    }

    #[test]
    fn empty_collection_yields_empty_state() {
        assert_eq!(summarize(&[]), Summary::Empty);
    }

    #[test]
    fn averages_overall_and_per_product() {
        let reviews = mixed_reviews();
        let report = report(summarize(&reviews));

        assert_eq!(report.total, 6);
        assert!((report.overall_average - 26.0 / 6.0).abs() < 1e-9);
        let averages: Vec<(&str, f64)> = report
            .products
            .iter()
            .map(|entry| (entry.product.as_str(), entry.average))
            .collect();
        assert_eq!(averages, vec![("A", 4.5), ("B", 5.0), ("C", 4.0)]);
    }

    #[test]
    fn products_keep_first_appearance_order() {
        let reviews = vec![
            review(1, 1, "Zeta", 3, "x"),
            review(2, 2, "Alpha", 5, "x"),
            review(3, 1, "Zeta", 5, "x"),
        ];
        let report = report(summarize(&reviews));
        let order: Vec<&str> = report.products.iter().map(|p| p.product.as_str()).collect();
        assert_eq!(order, vec!["Zeta", "Alpha"]);
        assert_eq!(report.products[0].average, 4.0);
    }

    #[test]
    fn recent_is_last_three_in_insertion_order() {
        let reviews = mixed_reviews();
        let report = report(summarize(&reviews));
        let ids: Vec<u64> = report.recent.iter().map(|review| review.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
    }

    #[test]
    fn recent_holds_everything_when_fewer_than_limit() {
        let reviews = vec![review(1, 1, "A", 2, "x"), review(2, 1, "A", 3, "y")];
        let report = report(summarize(&reviews));
        assert_eq!(report.recent.len(), 2);
        assert_eq!(report.overall_average, 2.5);
    }

    #[test]
    fn custom_recent_limit_is_honored() {
        let reviews = mixed_reviews();
        let report = report(summarize_with(&reviews, 1));
        assert_eq!(report.recent.len(), 1);
        assert_eq!(report.recent[0].id, 6);
    }
}
