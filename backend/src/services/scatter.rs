//! Payload versus outcome points for the scatter chart.

use serde::{Deserialize, Serialize};

use crate::dataset::LaunchDataset;
use crate::models::{FlightNumber, LaunchRecord, PayloadRange, SiteSelection};

/// One scatter point: x = payload mass, y = outcome class, colored by booster category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_version_category: String,
    pub launch_site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<FlightNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            outcome_class: record.outcome.class(),
            booster_version_category: record.booster_version_category.clone(),
            launch_site: record.launch_site.clone(),
            flight_number: record.flight_number,
            booster_version: record.booster_version.clone(),
        }
    }
}

/// Chart-ready data for the payload scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartData {
    pub title: String,
    pub site: String,
    pub payload_range: PayloadRange,
    /// Booster version categories present among `points`, in order of first appearance.
    pub categories: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChartData {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Title shown above the scatter chart for a selection.
pub fn scatter_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "Payload vs. Launch Outcome (All Sites)".to_string(),
        SiteSelection::Site(site) => format!("Payload vs. Launch Outcome at {}", site),
    }
}

/// Derive the scatter chart for a site selection and payload range.
///
/// Keeps records whose payload lies in the closed `range` and, unless the
/// selection is "ALL", whose site matches. Points keep dataset order.
pub fn compute_scatter_chart(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChartData {
    let points: Vec<ScatterPoint> = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg) && selection.matches(&r.launch_site))
        .map(ScatterPoint::from)
        .collect();

    let mut categories: Vec<String> = Vec::new();
    for point in &points {
        if !categories.contains(&point.booster_version_category) {
            categories.push(point.booster_version_category.clone());
        }
    }

    ScatterChartData {
        title: scatter_title(selection),
        site: selection.to_string(),
        payload_range: range,
        categories,
        points,
    }
}
