//! Athlete-event records and the read-only, process-wide [`Dataset`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};

/// Athlete sex as recorded in the source data (`F` / `M`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Single-letter code used in the source data and in aggregate tables.
    pub fn code(self) -> &'static str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
        }
    }

    /// Display label used by the sex distribution chart.
    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "F" => Ok(Sex::Female),
            "M" => Ok(Sex::Male),
            other => Err(format!("expected F or M, got '{other}'")),
        }
    }
}

/// Olympic season. Ordered `Summer` before `Winter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Summer" => Ok(Season::Summer),
            "Winter" => Ok(Season::Winter),
            other => Err(format!("expected Summer or Winter, got '{other}'")),
        }
    }
}

/// Medal type. Ordered the way charts list medals: gold, silver, bronze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    pub fn as_str(self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gold" => Ok(Medal::Gold),
            "Silver" => Ok(Medal::Silver),
            "Bronze" => Ok(Medal::Bronze),
            other => Err(format!("expected Gold, Silver or Bronze, got '{other}'")),
        }
    }
}

/// One athlete's participation in one event at one Games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteEvent {
    /// Athlete identifier. Repeats across an athlete's events.
    pub id: i64,
    pub name: Option<String>,
    pub sex: Sex,
    pub age: Option<f64>,
    pub team: String,
    /// National Olympic Committee code.
    pub noc: String,
    pub year: i64,
    pub season: Season,
    pub sport: String,
    pub event: Option<String>,
    /// `None` when no medal was won.
    pub medal: Option<Medal>,
}

impl AthleteEvent {
    /// A Summer 2000 record with no age and no medal; refine with the `with_*` methods.
    pub fn new(id: i64, sex: Sex, noc: impl Into<String>, sport: impl Into<String>) -> Self {
        let noc = noc.into();
        Self {
            id,
            name: None,
            sex,
            age: None,
            team: noc.clone(),
            noc,
            year: 2000,
            season: Season::Summer,
            sport: sport.into(),
            event: None,
            medal: None,
        }
    }

    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_medal(mut self, medal: Medal) -> Self {
        self.medal = Some(medal);
        self
    }

    pub fn with_games(mut self, season: Season, year: i64) -> Self {
        self.season = season;
        self.year = year;
        self
    }
}

/// Immutable, shareable collection of [`AthleteEvent`]s.
///
/// Cloning is cheap: clones share the same record storage. There is no way to obtain mutable
/// access to the records once the dataset is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[AthleteEvent]>,
}

impl Dataset {
    pub fn new(records: Vec<AthleteEvent>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[AthleteEvent] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AthleteEvent> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<AthleteEvent> for Dataset {
    fn from_iter<I: IntoIterator<Item = AthleteEvent>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a AthleteEvent;
    type IntoIter = std::slice::Iter<'a, AthleteEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static GLOBAL: OnceCell<Dataset> = OnceCell::new();

/// Install the process-wide dataset. Must happen before any dispatch that reads [`global`].
///
/// Returns [`DashboardError::AlreadyLoaded`] if a dataset was already installed.
pub fn init_global(dataset: Dataset) -> DashboardResult<&'static Dataset> {
    GLOBAL
        .set(dataset)
        .map_err(|_| DashboardError::AlreadyLoaded)?;
    log::info!("dataset installed: records={}", global()?.len());
    global()
}

/// The process-wide dataset, or [`DashboardError::NotLoaded`] before [`init_global`].
pub fn global() -> DashboardResult<&'static Dataset> {
    GLOBAL.get().ok_or(DashboardError::NotLoaded)
}
