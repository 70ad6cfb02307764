//! In-memory building blocks for the chart aggregations.
//!
//! The processing layer reads a [`crate::dataset::Dataset`] and never writes to it. Each helper
//! returns new values (borrowed record views, counts, tallies or bins):
//!
//! - [`filter`]: record selection by NOC, sport, medal and age presence
//! - [`group`]: group-by counts, frequency counts and gold/silver/bronze tallies
//! - [`bin`]: decade age groups and histograms
//!
//! ## Example: filter → tally → rank
//!
//! ```rust
//! use olympics_dashboard::dataset::{AthleteEvent, Dataset, Medal, Sex};
//! use olympics_dashboard::processing::{by_sport, rank_by_total, tally_medals_by};
//!
//! let ds = Dataset::new(vec![
//!     AthleteEvent::new(1, Sex::Male, "USA", "Swimming").with_medal(Medal::Gold),
//!     AthleteEvent::new(2, Sex::Female, "AUS", "Swimming").with_medal(Medal::Silver),
//!     AthleteEvent::new(3, Sex::Female, "AUS", "Swimming").with_medal(Medal::Gold),
//!     AthleteEvent::new(4, Sex::Male, "SWE", "Rowing").with_medal(Medal::Gold),
//! ]);
//!
//! let swimmers = by_sport(&ds, "Swimming");
//! let ranked = rank_by_total(tally_medals_by(swimmers, |r| r.noc.clone()));
//! assert_eq!(ranked[0].0, "AUS");
//! assert_eq!(ranked[0].1.total(), 2);
//! ```

pub mod bin;
pub mod filter;
pub mod group;

pub use bin::{histogram, AgeGroup, Bin, BinSpec};
pub use filter::{ages, by_noc, by_sport, filter, medalists, unique_athletes, AUSTRALIA_NOCS};
pub use group::{count_by, rank_by_total, tally_medals_by, value_counts, MedalTally};
