//! Flat-file customer and review collector.
//!
//! The crate keeps two ordered collections (customers and their reviews),
//! mirrors them to JSON files after every mutation, and builds a bordered
//! text report plus a CSV export from the reviews.
//!
//! - **[`core`]**: Pure logic (record types, aggregation, rendering, input
//!   validation). No I/O.
//! - **[`io`]**: Filesystem side effects (paths, config, JSON stores, CSV).
//!
//! [`repository`] ties the two together behind an explicit load/save
//! lifecycle; [`menu`] and [`seed`] are thin callers used by the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod menu;
pub mod repository;
pub mod seed;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
