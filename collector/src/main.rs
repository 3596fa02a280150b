use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use collector::core::render::{render_listing, render_report};
use collector::core::summary::summarize_with;
use collector::core::types::{AddReviewOutcome, CustomerId};
use collector::core::validate::{parse_customer_id, parse_rating};
use collector::exit_codes;
use collector::io::config::{CollectorConfig, load_config};
use collector::io::export::export_to_path;
use collector::io::paths::{DataPaths, config_path};
use collector::logging;
use collector::menu::run_menu;
use collector::repository::Repository;
use collector::seed::seed_sample_data;

#[derive(Parser)]
#[command(
    name = "collector",
    version,
    about = "Collect customer reviews in flat files and report on them"
)]
struct Cli {
    /// Directory holding `collector.toml` and the JSON stores.
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Register a customer and print the assigned id.
    AddCustomer {
        name: String,
        email: String,
        product: String,
    },
    /// Record a review for an existing customer.
    AddReview {
        #[arg(value_parser = parse_customer_id)]
        customer_id: CustomerId,
        /// Whole number from 1 to 5.
        #[arg(value_parser = parse_rating)]
        rating: u8,
        comment: String,
    },
    /// Print the summary report.
    Report,
    /// Write every review to a CSV file.
    Export {
        /// Target file; relative paths resolve against the data directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print every customer and review.
    List,
    /// Append the sample customers and reviews.
    Seed,
    /// Interactive menu (default when no command is given).
    Menu,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    // Usage errors map to INVALID rather than clap's own exit code.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return Ok(exit_codes::INVALID);
        }
    };
    let config = load_config(&config_path(&cli.data_dir))?;
    let paths = DataPaths::new(&cli.data_dir, &config);
    let mut repo = Repository::load(paths).context("load data")?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::AddCustomer {
            name,
            email,
            product,
        } => {
            let id = repo.add_customer(&name, &email, &product)?;
            println!("customer added: id={id}");
        }
        Command::AddReview {
            customer_id,
            rating,
            comment,
        } => match repo.add_review(customer_id, rating, &comment)? {
            AddReviewOutcome::Added(id) => println!("review added: id={id}"),
            AddReviewOutcome::CustomerNotFound => {
                eprintln!("customer {customer_id} not found");
                return Ok(exit_codes::NOT_FOUND);
            }
        },
        Command::Report => println!("{}", report_text(&repo, &config)),
        Command::Export { output } => {
            let path = repo.paths().resolve_export(output.as_deref());
            let rows = export_to_path(repo.reviews(), &path)?;
            println!("exported: rows={rows} path={}", path.display());
        }
        Command::List => print!("{}", render_listing(repo.customers(), repo.reviews())),
        Command::Seed => {
            let summary = seed_sample_data(&mut repo)?;
            println!(
                "seeded: customers={} reviews={}",
                summary.customers, summary.reviews
            );
        }
        Command::Menu => {
            let stdin = io::stdin();
            run_menu(&mut repo, &config, stdin.lock(), io::stdout())?;
        }
    }
    Ok(exit_codes::OK)
}

fn report_text(repo: &Repository, config: &CollectorConfig) -> String {
    let summary = summarize_with(repo.reviews(), config.report.recent_limit);
    render_report(&summary, config.report.comment_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_menu() {
        let cli = Cli::parse_from(["collector"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.data_dir, PathBuf::from("."));
    }

    #[test]
    fn parse_add_review() {
        let cli = Cli::parse_from(["collector", "add-review", "3", "5", "great"]);
        assert!(matches!(
            cli.command,
            Some(Command::AddReview {
                customer_id: 3,
                rating: 5,
                ..
            })
        ));
    }

    #[test]
    fn parse_rejects_rating_out_of_range() {
        let result = Cli::try_parse_from(["collector", "add-review", "1", "6", "nope"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_non_numeric_customer_id() {
        let result = Cli::try_parse_from(["collector", "add-review", "abc", "4", "nope"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_global_data_dir_after_subcommand() {
        let cli = Cli::parse_from(["collector", "report", "--data-dir", "/tmp/reviews"]);
        assert!(matches!(cli.command, Some(Command::Report)));
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/reviews"));
    }
}
