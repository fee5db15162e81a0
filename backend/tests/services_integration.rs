//! Properties of the chart derivations over the sample launch table.

use std::path::PathBuf;

use launch_dashboard::dataset::LaunchDataset;
use launch_dashboard::io::LaunchLoader;
use launch_dashboard::models::{LaunchOutcome, LaunchRecord, LaunchSite, PayloadRange, SiteSelection};
use launch_dashboard::services::{build_layout, compute_pie_chart, compute_scatter_chart, PieGrouping};

fn sample_dataset() -> LaunchDataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/spacex_launch_dash.csv");
    LaunchLoader::load_from_file(&path).expect("sample launch table should load")
}

fn scenario_dataset() -> LaunchDataset {
    LaunchDataset::new(vec![
        LaunchRecord::new("CCAFS LC-40", 500.0, LaunchOutcome::Success, "v1.0"),
        LaunchRecord::new("CCAFS LC-40", 3000.0, LaunchOutcome::Failure, "v1.1"),
        LaunchRecord::new("KSC LC-39A", 7000.0, LaunchOutcome::Success, "v1.1"),
    ])
}

fn count_for(data: &launch_dashboard::services::PieChartData, label: &str) -> Option<usize> {
    data.slices.iter().find(|s| s.label == label).map(|s| s.count)
}

// =========================================================
// Pie chart
// =========================================================

#[test]
fn test_all_sites_pie_has_one_slice_per_site() {
    let dataset = sample_dataset();
    let data = compute_pie_chart(&dataset, &SiteSelection::All);

    assert_eq!(data.grouping, PieGrouping::LaunchSite);
    assert_eq!(data.slices.len(), dataset.distinct_sites().len());
    assert_eq!(data.total, dataset.len());
    assert_eq!(data.slices.iter().map(|s| s.count).sum::<usize>(), dataset.len());
}

#[test]
fn test_site_pie_sums_to_site_row_count() {
    let dataset = sample_dataset();
    for site in LaunchSite::ALL {
        let selection = SiteSelection::from(site);
        let data = compute_pie_chart(&dataset, &selection);
        let expected = dataset
            .records()
            .iter()
            .filter(|r| r.launch_site == site.as_str())
            .count();

        assert_eq!(data.total, expected, "site {}", site);
        assert!(data.slices.iter().all(|s| s.label == "0" || s.label == "1"));
        assert_eq!(data.title, format!("Success Rate for {}", site));
    }
}

#[test]
fn test_site_pie_counts_outcomes() {
    let dataset = sample_dataset();
    let data = compute_pie_chart(&dataset, &SiteSelection::from(LaunchSite::KscLc39a));
    assert_eq!(count_for(&data, "1"), Some(3));
    assert_eq!(count_for(&data, "0"), Some(1));
}

#[test]
fn test_scenario_pie() {
    let dataset = scenario_dataset();

    let all = compute_pie_chart(&dataset, &SiteSelection::All);
    assert_eq!(count_for(&all, "CCAFS LC-40"), Some(2));
    assert_eq!(count_for(&all, "KSC LC-39A"), Some(1));
    assert_eq!(all.slices.len(), 2);

    let ccafs = compute_pie_chart(&dataset, &SiteSelection::parse("CCAFS LC-40"));
    assert_eq!(count_for(&ccafs, "1"), Some(1));
    assert_eq!(count_for(&ccafs, "0"), Some(1));
}

// =========================================================
// Scatter chart
// =========================================================

#[test]
fn test_scenario_scatter() {
    let dataset = scenario_dataset();
    let full = compute_scatter_chart(&dataset, &SiteSelection::All, PayloadRange::new(0.0, 10000.0));
    assert_eq!(full.len(), 3);

    let heavy = compute_scatter_chart(&dataset, &SiteSelection::All, PayloadRange::new(600.0, 10000.0));
    assert_eq!(heavy.len(), 2);
    assert!(heavy.points.iter().all(|p| p.payload_mass_kg != 500.0));
}

#[test]
fn test_full_bounds_return_every_row() {
    let dataset = sample_dataset();
    let range = dataset.payload_bounds().full_range();
    let data = compute_scatter_chart(&dataset, &SiteSelection::All, range);
    assert_eq!(data.len(), dataset.len());
}

#[test]
fn test_scatter_points_lie_in_range() {
    let dataset = sample_dataset();
    for (low, high) in [(0.0, 1000.0), (2000.0, 5000.0), (5000.0, 9600.0), (3170.0, 3170.0)] {
        let range = PayloadRange::new(low, high);
        let data = compute_scatter_chart(&dataset, &SiteSelection::All, range);
        assert!(data
            .points
            .iter()
            .all(|p| low <= p.payload_mass_kg && p.payload_mass_kg <= high));
    }
}

fn assert_narrowing_never_grows(dataset: &LaunchDataset, selection: &SiteSelection) {
    let bounds = dataset.payload_bounds();

    let mut previous = compute_scatter_chart(dataset, selection, bounds.full_range()).len();
    let mut high = bounds.max;
    while high >= bounds.min {
        let size = compute_scatter_chart(dataset, selection, PayloadRange::new(bounds.min, high)).len();
        assert!(size <= previous, "site {} high {}", selection, high);
        previous = size;
        high -= 1000.0;
    }

    let mut previous = compute_scatter_chart(dataset, selection, bounds.full_range()).len();
    let mut low = bounds.min;
    while low <= bounds.max {
        let size = compute_scatter_chart(dataset, selection, PayloadRange::new(low, bounds.max)).len();
        assert!(size <= previous, "site {} low {}", selection, low);
        previous = size;
        low += 1000.0;
    }
}

#[test]
fn test_narrowing_range_never_grows_result() {
    assert_narrowing_never_grows(&sample_dataset(), &SiteSelection::All);
}

#[test]
fn test_narrowing_range_never_grows_result_per_site() {
    let dataset = sample_dataset();
    for site in LaunchSite::ALL {
        assert_narrowing_never_grows(&dataset, &SiteSelection::from(site));
    }
}

#[test]
fn test_site_filter_applies_to_scatter() {
    let dataset = sample_dataset();
    let selection = SiteSelection::from(LaunchSite::VafbSlc4e);
    let data = compute_scatter_chart(&dataset, &selection, dataset.payload_bounds().full_range());

    assert_eq!(data.len(), 4);
    assert!(data.points.iter().all(|p| p.launch_site == "VAFB SLC-4E"));
    assert_eq!(data.title, "Payload vs. Launch Outcome at VAFB SLC-4E");
}

#[test]
fn test_derivations_are_idempotent() {
    let dataset = sample_dataset();
    let selection = SiteSelection::from(LaunchSite::CcafsLc40);
    let range = PayloadRange::new(0.0, 4000.0);

    assert_eq!(
        compute_pie_chart(&dataset, &selection),
        compute_pie_chart(&dataset, &selection)
    );
    assert_eq!(
        compute_scatter_chart(&dataset, &selection, range),
        compute_scatter_chart(&dataset, &selection, range)
    );
}

// =========================================================
// Layout
// =========================================================

#[test]
fn test_layout_slider_matches_sample_bounds() {
    let dataset = sample_dataset();
    let layout = build_layout(&dataset);
    assert_eq!(layout.payload_slider.min, 0.0);
    assert_eq!(layout.payload_slider.max, 9600.0);
    assert_eq!(layout.payload_slider.track_max, 10000.0);
    assert_eq!(layout.site_dropdown.options.len(), 5);
}

#[test]
fn test_sample_sites_match_dropdown() {
    assert!(sample_dataset().reconcile_sites().is_consistent());
}
