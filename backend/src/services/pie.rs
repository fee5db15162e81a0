//! Outcome distribution for the success pie chart.

use serde::{Deserialize, Serialize};

use crate::dataset::LaunchDataset;
use crate::models::{LaunchRecord, SiteSelection};

/// What each slice of the pie counts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieGrouping {
    /// One slice per launch site (the "ALL" view).
    LaunchSite,
    /// One slice per outcome class (a single-site view).
    OutcomeClass,
}

/// A single pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

/// Chart-ready data for the success pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChartData {
    pub title: String,
    pub site: String,
    pub grouping: PieGrouping,
    pub slices: Vec<PieSlice>,
    pub total: usize,
}

/// Title shown above the pie chart for a selection.
pub fn pie_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "Success Rate by Launch Site".to_string(),
        SiteSelection::Site(site) => format!("Success Rate for {}", site),
    }
}

/// Count records per key, keeping keys in order of first appearance.
fn count_by<'a, F>(records: impl Iterator<Item = &'a LaunchRecord>, key: F) -> Vec<PieSlice>
where
    F: Fn(&LaunchRecord) -> String,
{
    let mut slices: Vec<PieSlice> = Vec::new();
    for record in records {
        let label = key(record);
        match slices.iter_mut().find(|s| s.label == label) {
            Some(slice) => slice.count += 1,
            None => slices.push(PieSlice { label, count: 1 }),
        }
    }
    slices
}

/// Derive the pie chart for the current site selection.
///
/// "ALL" counts every record per launch site; a single site counts that site's
/// records per outcome class. A site with no records yields zero slices.
pub fn compute_pie_chart(dataset: &LaunchDataset, selection: &SiteSelection) -> PieChartData {
    let (grouping, slices) = match selection {
        SiteSelection::All => (
            PieGrouping::LaunchSite,
            count_by(dataset.records().iter(), |r| r.launch_site.clone()),
        ),
        SiteSelection::Site(_) => (
            PieGrouping::OutcomeClass,
            count_by(
                dataset
                    .records()
                    .iter()
                    .filter(|r| selection.matches(&r.launch_site)),
                |r| r.outcome.to_string(),
            ),
        ),
    };
    let total = slices.iter().map(|s| s.count).sum();

    PieChartData {
        title: pie_title(selection),
        site: selection.to_string(),
        grouping,
        slices,
        total,
    }
}
