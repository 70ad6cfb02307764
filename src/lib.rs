//! `olympics-dashboard` is the data core of an Olympic athlete-events dashboard: it loads the
//! athlete-events table once, derives twelve chart-ready aggregates from it, and maps a user's
//! dropdown choice to the matching aggregate.
//!
//! The primary entrypoints are [`dashboard::Dashboard`] (load + select + render whole page) and,
//! one level down, [`dispatch::Dispatcher`] and [`catalog::aggregate`].
//!
//! ## Data
//!
//! The input is the "athlete events" CSV: one row per athlete per event per Games, with the
//! columns `ID, Sex, Age, Team, NOC, Year, Season, Sport, Medal` (plus optional `Name`, `Event`,
//! and others that are ignored). Empty cells and `NA` are missing values. See
//! [`ingestion::csv`] for the exact rules.
//!
//! The loaded [`dataset::Dataset`] is immutable and cheap to clone. It can be installed once as
//! the process-wide dataset with [`dataset::init_global`].
//!
//! ## Charts
//!
//! | Key | Kind |
//! |---|---|
//! | `sex_distribution` | pie |
//! | `top_ten_countries` | bar-grouped |
//! | `age_group_medals` | bar-grouped |
//! | `medals_per_sport_australia` | bar-grouped |
//! | `australian_medals_per_year` | bar-stacked |
//! | `histogram_australia` | histogram |
//! | `medals_country_swimming` | bar-grouped |
//! | `age_distribution_swimming` | histogram |
//! | `medal_distribution_per_year_tug_of_war` | bar-grouped |
//! | `age_distribution_tug_of_war` | histogram |
//! | `cross_country_medals_per_country` | bar-stacked |
//! | `cross_country_skiers_age` | histogram |
//!
//! ## Example: dispatch a dropdown selection
//!
//! ```rust
//! use olympics_dashboard::dataset::{AthleteEvent, Dataset, Medal, Sex};
//! use olympics_dashboard::dispatch::Dispatcher;
//! use olympics_dashboard::types::Value;
//!
//! let ds = Dataset::new(vec![
//!     AthleteEvent::new(1, Sex::Female, "AUS", "Swimming").with_age(17.0).with_medal(Medal::Gold),
//!     AthleteEvent::new(2, Sex::Male, "USA", "Swimming").with_age(22.0).with_medal(Medal::Gold),
//!     AthleteEvent::new(2, Sex::Male, "USA", "Swimming").with_age(22.0).with_medal(Medal::Silver),
//! ]);
//! let dispatcher = Dispatcher::new(ds);
//!
//! let out = dispatcher.dispatch_key("medals_country_swimming").unwrap();
//! let table = &out.aggregate().unwrap().table;
//! assert_eq!(table.get(0, "NOC"), Some(&Value::from("USA")));
//! assert_eq!(table.get(0, "Total"), Some(&Value::Int64(2)));
//!
//! assert!(dispatcher.dispatch_key("none").unwrap().is_empty());
//! assert!(dispatcher.dispatch_key("bogus_key").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the twelve aggregations and [`catalog::ChartKey`]
//! - [`dispatch`]: selection parsing and dispatch
//! - [`processing`]: filter / group / bin building blocks
//! - [`dataset`]: athlete-event records and the shared dataset
//! - [`types`]: aggregate table types
//! - [`ingestion`]: CSV loading with observer hooks
//! - [`render`], [`ui`]: payloads for the rendering and UI collaborators
//! - [`config`], [`error`]
//!
//! Logging goes through the `log` facade; install any logger to see it.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod dispatch;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod render;
pub mod types;
pub mod ui;

pub use error::{DashboardError, DashboardResult};
