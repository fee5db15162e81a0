//! Selection state: the dropdown and slider values a derivation runs against.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::launch::LaunchSite;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Current value of the site dropdown.
///
/// Any value other than [`ALL_SITES`] is kept verbatim: a value that matches no
/// record simply selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a raw dropdown value. Empty input falls back to [`SiteSelection::All`].
    ///
    /// Site names are compared verbatim, surrounding whitespace included.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(raw.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Whether a record at `launch_site` passes this selection.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<LaunchSite> for SiteSelection {
    fn from(site: LaunchSite) -> Self {
        SiteSelection::Site(site.as_str().to_string())
    }
}

impl From<Option<&str>> for SiteSelection {
    fn from(raw: Option<&str>) -> Self {
        raw.map(SiteSelection::parse).unwrap_or_default()
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed payload-mass interval `[low, high]` in kilograms.
///
/// An inverted interval (`low > high`) contains no value.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_empty(&self) -> bool {
        !(self.low <= self.high)
    }

    pub fn is_finite(&self) -> bool {
        self.low.is_finite() && self.high.is_finite()
    }
}

/// Observed minimum and maximum payload mass of a dataset.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// Compute bounds over a sequence of payload masses; `[0, 0]` when empty.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Self { min: 0.0, max: 0.0 };
        };
        let (min, max) = iter.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        Self { min, max }
    }

    /// The slider's default value: the whole observed range.
    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min, self.max)
    }

    /// Pull slider ends that overshoot the dataset back onto its bounds.
    ///
    /// Only the outward side of each end is clamped, so the selected rows never
    /// change and an inverted range stays inverted.
    pub fn clamp(&self, range: PayloadRange) -> PayloadRange {
        PayloadRange::new(range.low.max(self.min), range.high.min(self.max))
    }

    /// Fill in missing slider ends with the dataset bounds.
    pub fn range_or_full(&self, low: Option<f64>, high: Option<f64>) -> PayloadRange {
        PayloadRange::new(low.unwrap_or(self.min), high.unwrap_or(self.max))
    }
}
