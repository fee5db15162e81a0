//! Launch records and the closed set of launch sites offered by the dashboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Flight number from the launch table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightNumber(pub u32);

impl FlightNumber {
    pub fn new(value: u32) -> Self {
        FlightNumber(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Launch sites offered in the site dropdown.
///
/// The dataset itself stores sites as free text (see [`LaunchRecord::launch_site`]);
/// this enumeration only fixes which sites the dashboard lets users pick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchSite {
    #[serde(rename = "CCAFS LC-40")]
    CcafsLc40,
    #[serde(rename = "VAFB SLC-4E")]
    VafbSlc4e,
    #[serde(rename = "KSC LC-39A")]
    KscLc39a,
    #[serde(rename = "CCAFS SLC-40")]
    CcafsSlc40,
}

impl LaunchSite {
    /// All sites, in dropdown order.
    pub const ALL: [LaunchSite; 4] = [
        LaunchSite::CcafsLc40,
        LaunchSite::VafbSlc4e,
        LaunchSite::KscLc39a,
        LaunchSite::CcafsSlc40,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchSite::CcafsLc40 => "CCAFS LC-40",
            LaunchSite::VafbSlc4e => "VAFB SLC-4E",
            LaunchSite::KscLc39a => "KSC LC-39A",
            LaunchSite::CcafsSlc40 => "CCAFS SLC-40",
        }
    }
}

impl fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name one of the known launch sites.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown launch site '{0}'")]
pub struct UnknownSite(pub String);

impl FromStr for LaunchSite {
    type Err = UnknownSite;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LaunchSite::ALL
            .into_iter()
            .find(|site| site.as_str() == s)
            .ok_or_else(|| UnknownSite(s.to_string()))
    }
}

/// Outcome of a launch, stored as the `class` column (0 = failure, 1 = success).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LaunchOutcome {
    Failure,
    Success,
}

impl LaunchOutcome {
    pub fn class(&self) -> u8 {
        match self {
            LaunchOutcome::Failure => 0,
            LaunchOutcome::Success => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Success)
    }
}

impl TryFrom<u8> for LaunchOutcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LaunchOutcome::Failure),
            1 => Ok(LaunchOutcome::Success),
            other => Err(format!("class must be 0 or 1, got {}", other)),
        }
    }
}

impl From<LaunchOutcome> for u8 {
    fn from(outcome: LaunchOutcome) -> Self {
        outcome.class()
    }
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

/// One row of the launch dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<FlightNumber>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Mission Outcome", default)]
    pub mission_outcome: Option<String>,
    #[serde(rename = "class")]
    pub outcome: LaunchOutcome,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Build a record from the four columns the dashboard filters and groups on.
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: LaunchOutcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            mission_outcome: None,
            outcome,
            payload_mass_kg,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
        }
    }

    pub fn with_flight_number(mut self, flight_number: u32) -> Self {
        self.flight_number = Some(FlightNumber::new(flight_number));
        self
    }

    pub fn with_booster_version(mut self, booster_version: impl Into<String>) -> Self {
        self.booster_version = Some(booster_version.into());
        self
    }
}
