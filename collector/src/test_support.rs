//! Test-only helpers for building records and isolated repositories.

use std::cell::Cell;
use std::path::Path;

use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use crate::core::types::{Customer, CustomerId, Review, ReviewId};
use crate::io::clock::Clock;
use crate::io::config::CollectorConfig;
use crate::io::paths::DataPaths;
use crate::repository::Repository;

/// `2024-03-01 09:30`, the instant every fixture is stamped with.
pub fn fixed_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .unwrap_or_default()
}

/// Create a deterministic customer; email is derived from the lowercased name.
pub fn customer(id: CustomerId, name: &str, product: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        product: product.to_string(),
        join_date: fixed_instant().date(),
    }
}

/// Create a deterministic review whose customer name is `Customer <customer_id>`.
pub fn review(
    id: ReviewId,
    customer_id: CustomerId,
    product: &str,
    rating: u8,
    comment: &str,
) -> Review {
    Review {
        id,
        customer_id,
        customer_name: format!("Customer {customer_id}"),
        product: product.to_string(),
        rating,
        comment: comment.to_string(),
        timestamp: fixed_instant(),
    }
}

/// Clock that starts at [`fixed_instant`] and advances one minute per read.
#[derive(Debug, Default)]
pub struct SteppingClock {
    reads: Cell<i64>,
}

impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        fixed_instant() + Duration::minutes(reads)
    }
}

/// Temporary data directory with helpers for opening repositories over it.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> DataPaths {
        DataPaths::new(self.path(), &CollectorConfig::default())
    }

    /// Load a repository over this directory with a [`SteppingClock`].
    pub fn open(&self) -> Result<Repository<SteppingClock>> {
        Repository::load_with_clock(self.paths(), SteppingClock::default())
    }
}
