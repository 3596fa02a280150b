//! Sample data for demos and first runs.

use anyhow::{Result, bail};
use tracing::info;

use crate::core::types::{AddReviewOutcome, CustomerId};
use crate::io::clock::Clock;
use crate::repository::Repository;

const SAMPLE_CUSTOMERS: [(&str, &str, &str); 5] = [
    ("Emma Johnson", "emma@example.com", "Premium Watch"),
    ("James Smith", "james@example.com", "Designer Handbag"),
    ("Sophia Williams", "sophia@example.com", "Luxury Perfume"),
    ("Michael Brown", "michael@example.com", "Silk Scarf"),
    ("Olivia Davis", "olivia@example.com", "Leather Wallet"),
];

/// (index into `SAMPLE_CUSTOMERS`, rating, comment)
const SAMPLE_REVIEWS: [(usize, u8, &str); 6] = [
    (0, 5, "Exceptional quality and craftsmanship. Absolutely love it!"),
    (0, 4, "Beautiful product, though delivery took a bit long."),
    (1, 5, "This is exactly what I was looking for. Perfect gift!"),
    (2, 3, "Nice product but the scent doesn't last as long as I hoped."),
    (3, 5, "The material is so luxurious. Definitely worth the price."),
    (4, 4, "Great quality and the packaging was exquisite."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub reviews: usize,
}

/// Append the sample customers and their reviews.
///
/// Reviews are attached to the ids the sample customers actually received, so
/// seeding a non-empty repository never misattributes a review.
pub fn seed_sample_data<C: Clock>(repo: &mut Repository<C>) -> Result<SeedSummary> {
    let mut ids: Vec<CustomerId> = Vec::with_capacity(SAMPLE_CUSTOMERS.len());
    for (name, email, product) in SAMPLE_CUSTOMERS {
        ids.push(repo.add_customer(name, email, product)?);
    }
    for (index, rating, comment) in SAMPLE_REVIEWS {
        let customer_id = ids[index];
        if let AddReviewOutcome::CustomerNotFound = repo.add_review(customer_id, rating, comment)? {
            bail!("seeded customer {customer_id} disappeared before its review was added");
        }
    }
    let summary = SeedSummary {
        customers: SAMPLE_CUSTOMERS.len(),
        reviews: SAMPLE_REVIEWS.len(),
    };
    info!(
        customers = summary.customers,
        reviews = summary.reviews,
        "sample data seeded"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::{Summary, summarize};
    use crate::test_support::TestStore;

    #[test]
    fn seeds_five_customers_and_six_reviews() {
        let store = TestStore::new().expect("store");
        let mut repo = store.open().expect("open");
        let summary = seed_sample_data(&mut repo).expect("seed");

        assert_eq!(summary, SeedSummary { customers: 5, reviews: 6 });
        assert_eq!(repo.customers().len(), 5);
        assert_eq!(repo.reviews().len(), 6);
        assert_eq!(repo.reviews()[3].product, "Luxury Perfume");

        let Summary::Report(report) = summarize(repo.reviews()) else {
            panic!("expected report");
        };
        assert!((report.overall_average - 26.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn seeding_after_existing_customers_links_new_ids() {
        let store = TestStore::new().expect("store");
        let mut repo = store.open().expect("open");
        repo.add_customer("Ada", "ada@example.com", "Telescope").expect("add");

        seed_sample_data(&mut repo).expect("seed");

        let first = &repo.reviews()[0];
        assert_eq!(first.customer_id, 2);
        assert_eq!(first.customer_name, "Emma Johnson");
        assert!(repo.reviews().iter().all(|review| review.product != "Telescope"));
    }
}
