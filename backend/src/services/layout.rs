//! Static description of the dashboard's widgets.
//!
//! The page builds its dropdown and slider from this, so the widget ids and
//! defaults live in one place.

use serde::{Deserialize, Serialize};

use crate::dataset::LaunchDataset;
use crate::models::{LaunchSite, PayloadBounds, PayloadRange, ALL_SITES};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Upper end of the slider track: `max` rounded up to a whole step above `min`.
    ///
    /// A range input only stops at `min + k * step`, so its track has to reach
    /// past `max` for the top thumb to cover the heaviest payload.
    pub track_max: f64,
    pub value: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_slider: PayloadSlider,
    pub pie_chart_id: String,
    pub scatter_chart_id: String,
}

/// Dropdown options: "All Sites" followed by every known launch site.
pub fn site_options() -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(LaunchSite::ALL.into_iter().map(|site| DropdownOption {
        label: site.as_str().to_string(),
        value: site.as_str().to_string(),
    }))
    .collect()
}

/// Smallest `min + k * step` that is not below `max`.
pub fn step_aligned_max(min: f64, max: f64, step: f64) -> f64 {
    if max <= min || step <= 0.0 {
        return min.max(max);
    }
    min + ((max - min) / step).ceil() * step
}

fn payload_slider(bounds: PayloadBounds) -> PayloadSlider {
    PayloadSlider {
        id: PAYLOAD_SLIDER_ID.to_string(),
        min: bounds.min,
        max: bounds.max,
        step: PAYLOAD_SLIDER_STEP,
        track_max: step_aligned_max(bounds.min, bounds.max, PAYLOAD_SLIDER_STEP),
        value: bounds.full_range(),
    }
}

/// Build the layout for a loaded dataset; slider bounds follow the data.
pub fn build_layout(dataset: &LaunchDataset) -> DashboardLayout {
    DashboardLayout {
        title: DASHBOARD_TITLE.to_string(),
        site_dropdown: SiteDropdown {
            id: SITE_DROPDOWN_ID.to_string(),
            options: site_options(),
            value: ALL_SITES.to_string(),
            placeholder: "Select a Launch Site".to_string(),
        },
        payload_slider: payload_slider(dataset.payload_bounds()),
        pie_chart_id: PIE_CHART_ID.to_string(),
        scatter_chart_id: SCATTER_CHART_ID.to_string(),
    }
}
