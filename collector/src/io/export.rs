//! Flat CSV export of the review collection.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::core::types::{Review, ReviewId};

/// Column order of the export; also the header row.
pub const EXPORT_HEADERS: [&str; 6] = ["id", "customer_name", "product", "rating", "comment", "date"];

/// One exported row. Field order defines column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow<'a> {
    pub id: ReviewId,
    pub customer_name: &'a str,
    pub product: &'a str,
    pub rating: u8,
    pub comment: &'a str,
    pub date: String,
}

impl<'a> From<&'a Review> for ExportRow<'a> {
    fn from(review: &'a Review) -> Self {
        Self {
            id: review.id,
            customer_name: &review.customer_name,
            product: &review.product,
            rating: review.rating,
            comment: &review.comment,
            date: review.date_label(),
        }
    }
}

/// Project every review onto an export row, preserving insertion order.
pub fn export_rows(reviews: &[Review]) -> Vec<ExportRow<'_>> {
    reviews.iter().map(ExportRow::from).collect()
}

/// Write the header and one row per review to `writer`. Returns the row count.
pub fn write_export<W: Write>(reviews: &[Review], writer: W) -> Result<usize> {
    // Header is written explicitly so an empty export still names its columns.
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(EXPORT_HEADERS).context("write csv header")?;
    let rows = export_rows(reviews);
    for row in &rows {
        csv.serialize(row)
            .with_context(|| format!("write csv row for review {}", row.id))?;
    }
    csv.flush().context("flush csv")?;
    Ok(rows.len())
}

/// Export reviews to a CSV file, overwriting it.
pub fn export_to_path(reviews: &[Review], path: &Path) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let written = write_export(reviews, file).with_context(|| format!("export {}", path.display()))?;
    info!(path = %path.display(), rows = written, "reviews exported");
    Ok(written)
}
