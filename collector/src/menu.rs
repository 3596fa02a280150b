//! Interactive numbered menu.
//!
//! Reads choices and field values line by line from any `BufRead` and writes
//! prompts and results to any `Write`, so tests can script a whole session.
//! Input is validated here before the repository is touched.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::render::{render_listing, render_report};
use crate::core::summary::summarize_with;
use crate::core::types::AddReviewOutcome;
use crate::core::validate::{parse_customer_id, parse_rating};
use crate::io::clock::Clock;
use crate::io::config::CollectorConfig;
use crate::io::export::export_to_path;
use crate::repository::Repository;
use crate::seed::seed_sample_data;

const RULE_WIDTH: usize = 50;
const SECTION_WIDTH: usize = 30;

const MENU_ITEMS: [&str; 7] = [
    "Add Customer",
    "Add Review",
    "Generate Report",
    "Export to CSV",
    "View All Data",
    "Add Sample Data",
    "Exit",
];

enum Flow {
    Continue,
    Exit,
}

/// Run the menu until the user picks Exit or input ends.
///
/// Storage failures while saving end the session with an error; everything
/// else (bad numbers, unknown customers, export problems) is reported inline.
pub fn run_menu<C, R, W>(
    repo: &mut Repository<C>,
    config: &CollectorConfig,
    input: R,
    output: W,
) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut menu = Menu {
        repo,
        config,
        input,
        output,
    };
    loop {
        menu.show_menu()?;
        let Some(choice) = menu.prompt("Enter your choice (1-7): ")? else {
            return Ok(());
        };
        debug!(choice = %choice, "menu choice");
        let flow = match choice.trim() {
            "1" => menu.add_customer()?,
            "2" => menu.add_review()?,
            "3" => menu.report()?,
            "4" => menu.export()?,
            "5" => menu.list()?,
            "6" => menu.seed()?,
            "7" => {
                writeln!(menu.output, "Thank you for using Review Collector!")?;
                Flow::Exit
            }
            _ => {
                writeln!(menu.output, "Invalid choice. Please try again.")?;
                Flow::Continue
            }
        };
        if let Flow::Exit = flow {
            return Ok(());
        }
    }
}

struct Menu<'a, C: Clock, R, W> {
    repo: &'a mut Repository<C>,
    config: &'a CollectorConfig,
    input: R,
    output: W,
}

impl<C: Clock, R: BufRead, W: Write> Menu<'_, C, R, W> {
    fn show_menu(&mut self) -> Result<()> {
        let rule = "═".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{:^width$}", "REVIEW COLLECTOR", width = RULE_WIDTH)?;
        writeln!(self.output, "{rule}")?;
        for (index, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {item}", index + 1)?;
        }
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<()> {
        let rule = "─".repeat(SECTION_WIDTH);
        writeln!(self.output, "\n{rule}\n{title}\n{rule}")?;
        Ok(())
    }

    /// Print `label` and read one line. `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush().context("flush prompt")?;
        let mut line = String::new();
        if self.input.read_line(&mut line).context("read input")? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add_customer(&mut self) -> Result<Flow> {
        self.section("ADD NEW CUSTOMER")?;
        let Some(name) = self.prompt("Customer Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.prompt("Customer Email: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(product) = self.prompt("Product Purchased: ")? else {
            return Ok(Flow::Exit);
        };
        let id = self.repo.add_customer(&name, &email, &product)?;
        writeln!(self.output, "Customer added successfully! ID: {id}")?;
        Ok(Flow::Continue)
    }

    fn add_review(&mut self) -> Result<Flow> {
        self.section("ADD NEW REVIEW")?;
        let Some(raw_id) = self.prompt("Customer ID: ")? else {
            return Ok(Flow::Exit);
        };
        let customer_id = match parse_customer_id(&raw_id) {
            Ok(id) => id,
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                return Ok(Flow::Continue);
            }
        };
        let Some(raw_rating) = self.prompt("Rating (1-5): ")? else {
            return Ok(Flow::Exit);
        };
        let rating = match parse_rating(&raw_rating) {
            Ok(rating) => rating,
            Err(err) => {
                writeln!(self.output, "Error: {err}")?;
                return Ok(Flow::Continue);
            }
        };
        let Some(comment) = self.prompt("Review Comment: ")? else {
            return Ok(Flow::Exit);
        };
        match self.repo.add_review(customer_id, rating, &comment)? {
            AddReviewOutcome::Added(_) => writeln!(self.output, "Review added successfully!")?,
            AddReviewOutcome::CustomerNotFound => {
                writeln!(self.output, "Customer ID {customer_id} not found!")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self) -> Result<Flow> {
        self.section("REVIEW REPORT")?;
        let summary = summarize_with(self.repo.reviews(), self.config.report.recent_limit);
        let text = render_report(&summary, self.config.report.comment_width);
        writeln!(self.output, "{text}")?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let label = format!("Export filename (default: {}): ", self.config.export_file);
        let Some(raw) = self.prompt(&label)? else {
            return Ok(Flow::Exit);
        };
        let raw = raw.trim();
        let target = (!raw.is_empty()).then(|| Path::new(raw));
        let path = self.repo.paths().resolve_export(target);
        match export_to_path(self.repo.reviews(), &path) {
            Ok(rows) => writeln!(
                self.output,
                "Data exported to {} ({rows} rows)",
                path.display()
            )?,
            Err(err) => writeln!(self.output, "Export failed: {err:#}")?,
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow> {
        self.section("ALL DATA")?;
        let text = render_listing(self.repo.customers(), self.repo.reviews());
        write!(self.output, "{text}")?;
        Ok(Flow::Continue)
    }

    fn seed(&mut self) -> Result<Flow> {
        let summary = seed_sample_data(self.repo)?;
        writeln!(
            self.output,
            "Sample data added successfully! ({} customers, {} reviews)",
            summary.customers, summary.reviews
        )?;
        Ok(Flow::Continue)
    }
}
