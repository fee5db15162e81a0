//! The immutable launch table every derivation reads from.

use serde::Serialize;

use crate::models::{LaunchRecord, LaunchSite, PayloadBounds};

/// Launch records loaded once at startup and never mutated afterwards.
///
/// Shared across request handlers behind an `Arc`; derivations only borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
}

impl LaunchDataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let bounds = PayloadBounds::from_values(records.iter().map(|r| r.payload_mass_kg));
        Self { records, bounds }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Minimum and maximum payload mass over all records.
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Distinct launch sites in order of first appearance.
    pub fn distinct_sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.launch_site.as_str()) {
                sites.push(record.launch_site.as_str());
            }
        }
        sites
    }

    /// Compare the dataset's sites with the fixed dropdown options.
    pub fn reconcile_sites(&self) -> SiteReconciliation {
        let present = self.distinct_sites();
        let unlisted = present
            .iter()
            .filter(|site| site.parse::<LaunchSite>().is_err())
            .map(|site| site.to_string())
            .collect();
        let absent = LaunchSite::ALL
            .into_iter()
            .filter(|site| !present.contains(&site.as_str()))
            .collect();
        SiteReconciliation { unlisted, absent }
    }
}

impl From<Vec<LaunchRecord>> for LaunchDataset {
    fn from(records: Vec<LaunchRecord>) -> Self {
        Self::new(records)
    }
}

/// Divergence between the dropdown options and the sites found in the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteReconciliation {
    /// Sites present in the data that the dropdown cannot select.
    pub unlisted: Vec<String>,
    /// Dropdown options with no records behind them.
    pub absent: Vec<LaunchSite>,
}

impl SiteReconciliation {
    pub fn is_consistent(&self) -> bool {
        self.unlisted.is_empty() && self.absent.is_empty()
    }

    /// Emit one warning per divergence.
    pub fn log_warnings(&self) {
        for site in &self.unlisted {
            log::warn!("Launch site '{}' appears in the data but not in the site dropdown", site);
        }
        for site in &self.absent {
            log::warn!("Dropdown site '{}' has no launch records", site);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LaunchOutcome;

    fn record(site: &str, payload: f64) -> LaunchRecord {
        LaunchRecord::new(site, payload, LaunchOutcome::Success, "FT")
    }

    #[test]
    fn test_bounds_and_len() {
        let dataset = LaunchDataset::new(vec![
            record("CCAFS LC-40", 500.0),
            record("KSC LC-39A", 7000.0),
            record("CCAFS LC-40", 3000.0),
        ]);
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.payload_bounds(), PayloadBounds { min: 500.0, max: 7000.0 });
    }

    #[test]
    fn test_distinct_sites_first_appearance_order() {
        let dataset = LaunchDataset::new(vec![
            record("KSC LC-39A", 1.0),
            record("CCAFS LC-40", 2.0),
            record("KSC LC-39A", 3.0),
        ]);
        assert_eq!(dataset.distinct_sites(), vec!["KSC LC-39A", "CCAFS LC-40"]);
    }

    #[test]
    fn test_reconcile_reports_both_directions() {
        let dataset = LaunchDataset::new(vec![
            record("CCAFS LC-40", 1.0),
            record("VAFB SLC-4E", 1.0),
            record("KSC LC-39A", 1.0),
            record("Starbase", 1.0),
        ]);
        let report = dataset.reconcile_sites();
        assert_eq!(report.unlisted, vec!["Starbase".to_string()]);
        assert_eq!(report.absent, vec![LaunchSite::CcafsSlc40]);
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_reconcile_consistent() {
        let dataset = LaunchDataset::new(
            LaunchSite::ALL
                .into_iter()
                .map(|site| record(site.as_str(), 100.0))
                .collect(),
        );
        assert!(dataset.reconcile_sites().is_consistent());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = LaunchDataset::new(vec![]);
        assert!(dataset.is_empty());
        assert_eq!(dataset.payload_bounds(), PayloadBounds { min: 0.0, max: 0.0 });
        assert_eq!(dataset.reconcile_sites().absent.len(), 4);
    }
}
