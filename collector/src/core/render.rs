//! Text rendering for reports and listings.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::core::summary::{ReviewReport, Summary};
use crate::core::types::{Customer, Review};

/// Comment width in the recent-reviews section of a report.
pub const COMMENT_WIDTH: usize = 35;
/// Widest comment that still fits a report row once quoted and cut.
pub const MAX_COMMENT_WIDTH: usize = ROW_WIDTH - 7;
/// Comment width in the full listing.
pub const LISTING_COMMENT_WIDTH: usize = 30;
/// Shown instead of a report when there are no reviews.
pub const EMPTY_REPORT: &str = "No reviews available yet.";

const INNER_WIDTH: usize = 50;
const ROW_WIDTH: usize = INNER_WIDTH - 2;
const PRODUCT_WIDTH: usize = 25;
const NAME_WIDTH: usize = 27;
const STAR: char = '★';
const ELLIPSIS: &str = "...";

/// Render a summary as a bordered text block.
pub fn render_report(summary: &Summary<'_>, comment_width: usize) -> String {
    match summary {
        Summary::Empty => EMPTY_REPORT.to_string(),
        Summary::Report(report) => render_populated(report, comment_width),
    }
}

fn render_populated(report: &ReviewReport<'_>, comment_width: usize) -> String {
    let mut lines = vec![
        border('╔', '╗'),
        title("REVIEW REPORT"),
        border('╠', '╣'),
        row(&format!("Total Reviews: {}", report.total)),
        row(&format!(
            "Average Rating: {:.1}/5 {}",
            report.overall_average,
            stars(report.overall_average)
        )),
        border('╠', '╣'),
    ];

    for entry in &report.products {
        lines.push(row(&format!(
            "{:<width$} {:.1}/5 {}",
            fit(&entry.product, PRODUCT_WIDTH),
            entry.average,
            stars(entry.average),
            width = PRODUCT_WIDTH
        )));
    }

    lines.push(border('╠', '╣'));
    lines.push(title("RECENT REVIEWS"));
    lines.push(border('╠', '╣'));

    for review in report.recent {
        lines.push(row(&format!(
            "{:16} {}/5 {}",
            review.date_label(),
            review.rating,
            fit(&review.customer_name, NAME_WIDTH)
        )));
        lines.push(row(&format!(
            "  \"{}\"",
            truncate(&review.comment, comment_width)
        )));
        lines.push(row(""));
    }

    lines.push(border('╚', '╝'));
    lines.join("\n")
}

/// One star per whole point of `average`; fractions are dropped, not rounded.
pub fn stars(average: f64) -> String {
    let count = if average.is_finite() && average > 0.0 {
        average.floor() as usize
    } else {
        0
    };
    STAR.to_string().repeat(count)
}

/// Cut `text` to `width` characters, appending `...` only when something was cut.
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    match text.char_indices().nth(width) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
    }
}

/// Like [`truncate`], but the result including `...` never exceeds `width`.
fn fit(text: &str, width: usize) -> Cow<'_, str> {
    if text.chars().count() <= width {
        return Cow::Borrowed(text);
    }
    truncate(text, width.saturating_sub(ELLIPSIS.len()))
}

/// Render every customer and review, one line each.
pub fn render_listing(customers: &[Customer], reviews: &[Review]) -> String {
    let mut out = String::from("CUSTOMERS:\n");
    for customer in customers {
        let _ = writeln!(
            out,
            "  {}: {} ({}) - {}",
            customer.id, customer.name, customer.email, customer.product
        );
    }
    out.push_str("\nREVIEWS:\n");
    for review in reviews {
        let _ = writeln!(
            out,
            "  {}: {} - {}/5 - {}",
            review.id,
            review.customer_name,
            review.rating,
            truncate(&review.comment, LISTING_COMMENT_WIDTH)
        );
    }
    out
}

fn border(left: char, right: char) -> String {
    format!("{left}{}{right}", "═".repeat(INNER_WIDTH))
}

fn title(text: &str) -> String {
    format!("║{text:^width$}║", width = INNER_WIDTH)
}

fn row(content: &str) -> String {
    format!("║  {:<width$}║", fit(content, ROW_WIDTH), width = ROW_WIDTH)
}
