//! Customer and review repository.
//!
//! Holds both collections in memory and mirrors them to their JSON stores.
//! Every mutation rewrites the store of the collection it changed before
//! returning. Stores are replaced atomically, so when that write fails the
//! file still holds the previous collection and the in-memory append is
//! undone to match it.

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::core::types::{AddReviewOutcome, Customer, CustomerId, Review, ReviewId};
use crate::io::clock::{Clock, SystemClock, to_minute};
use crate::io::paths::DataPaths;
use crate::io::store::{load_collection, save_collection};

#[derive(Debug)]
pub struct Repository<C: Clock = SystemClock> {
    paths: DataPaths,
    customers: Vec<Customer>,
    reviews: Vec<Review>,
    clock: C,
}

impl Repository<SystemClock> {
    /// Load both stores using the system clock for new records.
    pub fn load(paths: DataPaths) -> Result<Self> {
        Self::load_with_clock(paths, SystemClock)
    }
}

impl<C: Clock> Repository<C> {
    /// Load both stores. Missing stores start empty.
    #[instrument(skip_all, fields(root = %paths.root.display()))]
    pub fn load_with_clock(paths: DataPaths, clock: C) -> Result<Self> {
        let customers = load_collection(&paths.customers_path).context("load customers")?;
        let reviews = load_collection(&paths.reviews_path).context("load reviews")?;
        let repo = Self {
            paths,
            customers,
            reviews,
            clock,
        };
        debug!(
            customers = repo.customers.len(),
            reviews = repo.reviews.len(),
            "repository loaded"
        );
        Ok(repo)
    }

    /// Rewrite both stores with the current collections.
    pub fn save(&self) -> Result<()> {
        self.save_customers()?;
        self.save_reviews()
    }

    fn save_customers(&self) -> Result<()> {
        save_collection(&self.paths.customers_path, &self.customers).context("save customers")
    }

    fn save_reviews(&self) -> Result<()> {
        save_collection(&self.paths.reviews_path, &self.reviews).context("save reviews")
    }

    /// Append a customer and persist. Returns the new id.
    ///
    /// Emails are not checked for uniqueness.
    #[instrument(skip_all, fields(product = %product))]
    pub fn add_customer(&mut self, name: &str, email: &str, product: &str) -> Result<CustomerId> {
        let id = self.customers.len() as CustomerId + 1;
        self.customers.push(Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            product: product.to_string(),
            join_date: self.clock.now().date(),
        });
        if let Err(err) = self.save_customers() {
            self.customers.pop();
            return Err(err);
        }
        info!(customer_id = id, "customer added");
        Ok(id)
    }

    /// Append a review for an existing customer and persist.
    ///
    /// The customer's name and product are copied onto the review. The rating
    /// is stored as given; callers are expected to have validated it.
    #[instrument(skip_all, fields(customer_id = customer_id, rating = rating))]
    pub fn add_review(
        &mut self,
        customer_id: CustomerId,
        rating: u8,
        comment: &str,
    ) -> Result<AddReviewOutcome> {
        let Some(customer) = self.customer(customer_id) else {
            warn!(customer_id, "review rejected: customer not found");
            return Ok(AddReviewOutcome::CustomerNotFound);
        };
        let id = self.reviews.len() as ReviewId + 1;
        let review = Review {
            id,
            customer_id,
            customer_name: customer.name.clone(),
            product: customer.product.clone(),
            rating,
            comment: comment.to_string(),
            timestamp: to_minute(self.clock.now()),
        };
        self.reviews.push(review);
        if let Err(err) = self.save_reviews() {
            self.reviews.pop();
            return Err(err);
        }
        info!(review_id = id, "review added");
        Ok(AddReviewOutcome::Added(id))
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::io::config::CollectorConfig;
    use crate::test_support::{SteppingClock, TestStore, fixed_instant};

    #[test]
    fn customer_ids_are_sequential_from_one() {
        let store = TestStore::new().expect("store");
        let mut repo = store.open().expect("open");
        let ids: Vec<CustomerId> = ["Ada", "Grace", "Ada"]
            .iter()
            .map(|name| repo.add_customer(name, "same@example.com", "Watch").expect("add"))
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(repo.customers().len(), 3);
    }

    #[test]
    fn customer_join_date_comes_from_clock() {
        let store = TestStore::new().expect("store");
        let mut repo = store.open().expect("open");
        let id = repo.add_customer("Ada", "ada@example.com", "Watch").expect("add");
        let customer = repo.customer(id).expect("customer");
        assert_eq!(customer.join_date, fixed_instant().date());
    }

    #[test]
    fn review_for_unknown_customer_is_rejected_without_mutation() {
        let store = TestStore::new().expect("store");
        let mut repo = store.open().expect("open");
        repo.add_customer("Ada", "ada@example.com", "Watch").expect("add");

        let outcome = repo.add_review(42, 5, "ghost").expect("add review");
        assert_eq!(outcome, AddReviewOutcome::CustomerNotFound);
        assert!(repo.reviews().is_empty());
        let persisted = fs::read_to_string(&store.paths().reviews_path).expect("read");
        assert_eq!(persisted.trim(), "[]");
    }

    #[test]
    fn review_copies_customer_snapshot_fields() {
        let store = TestStore::new().expect("store");
        let mut repo = store.open().expect("open");
        repo.add_customer("Ada", "ada@example.com", "Watch").expect("add");
        let grace = repo.add_customer("Grace", "grace@example.com", "Scarf").expect("add");

        let outcome = repo.add_review(grace, 4, "soft").expect("add review");
        assert_eq!(outcome, AddReviewOutcome::Added(1));
        let review = &repo.reviews()[0];
        assert_eq!(review.customer_id, grace);
        assert_eq!(review.customer_name, "Grace");
        assert_eq!(review.product, "Scarf");
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn repository_stores_ratings_as_given() {
        let store = TestStore::new().expect("store");
        let mut repo = store.open().expect("open");
        let id = repo.add_customer("Ada", "ada@example.com", "Watch").expect("add");
        let outcome = repo.add_review(id, 9, "off the scale").expect("add review");
        assert_eq!(outcome, AddReviewOutcome::Added(1));
        assert_eq!(repo.reviews()[0].rating, 9);
    }

    /// Verifies save → fresh load reproduces both collections by value.
    #[test]
    fn reload_reproduces_collections() {
        let store = TestStore::new().expect("store");
        let mut repo = store.open().expect("open");
        let ada = repo.add_customer("Ada", "ada@example.com", "Watch").expect("add");
        let grace = repo.add_customer("Grace", "grace@example.com", "Scarf").expect("add");
        repo.add_review(ada, 5, "lovely, \"really\"").expect("review");
        repo.add_review(grace, 3, "ok").expect("review");

        let reloaded = store.open().expect("reopen");
        assert_eq!(reloaded.customers(), repo.customers());
        assert_eq!(reloaded.reviews(), repo.reviews());
    }

    #[test]
    fn ids_continue_after_reload() {
        let store = TestStore::new().expect("store");
        let mut repo = store.open().expect("open");
        repo.add_customer("Ada", "ada@example.com", "Watch").expect("add");
        drop(repo);

        let mut repo = store.open().expect("reopen");
        let id = repo.add_customer("Grace", "grace@example.com", "Scarf").expect("add");
        assert_eq!(id, 2);
    }

    #[test]
    fn failed_save_rolls_back_and_reports_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").expect("write");
        let paths = DataPaths::new(blocker.join("data"), &CollectorConfig::default());
        let mut repo = Repository::load_with_clock(paths, SteppingClock::default()).expect("load");

        let err = repo
            .add_customer("Ada", "ada@example.com", "Watch")
            .expect_err("unwritable");
        assert!(format!("{err:#}").contains("save customers"));
        assert!(repo.customers().is_empty());
    }

    #[test]
    fn failed_customer_save_leaves_store_unchanged() {
        let store = TestStore::new().expect("store");
        fs::create_dir(&store.paths().customers_path).expect("dir in place of store");
        let mut repo = store.open().expect("open");

        assert!(repo.add_customer("Ada", "ada@example.com", "Watch").is_err());
        assert!(repo.customers().is_empty());

        let reloaded = store.open().expect("reopen");
        assert!(reloaded.customers().is_empty());
    }

    #[test]
    fn unwritable_review_store_does_not_affect_customer_adds() {
        let store = TestStore::new().expect("store");
        fs::create_dir(&store.paths().reviews_path).expect("dir in place of store");
        let mut repo = store.open().expect("open");

        let id = repo.add_customer("Ada", "ada@example.com", "Watch").expect("add");
        assert!(repo.add_review(id, 5, "great").is_err());
        assert!(repo.reviews().is_empty());

        let reloaded = store.open().expect("reopen");
        assert_eq!(reloaded.customers(), repo.customers());
        assert!(reloaded.reviews().is_empty());
    }
}
