//! Data Transfer Objects for the HTTP API.
//!
//! Chart payloads are re-exported from the services module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::services::{DashboardLayout, PieChartData, ScatterChartData};

use super::error::AppError;
use crate::models::{PayloadBounds, PayloadRange, SiteSelection};

/// Query parameters for the pie chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Dropdown value; "ALL" or a launch site (default: ALL)
    #[serde(default)]
    pub site: Option<String>,
}

impl PieQuery {
    pub fn selection(&self) -> SiteSelection {
        SiteSelection::from(self.site.as_deref())
    }
}

/// Query parameters for the scatter chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Dropdown value; "ALL" or a launch site (default: ALL)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower slider value in kg (default: dataset minimum)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper slider value in kg (default: dataset maximum)
    #[serde(default)]
    pub high: Option<f64>,
}

impl ScatterQuery {
    pub fn selection(&self) -> SiteSelection {
        SiteSelection::from(self.site.as_deref())
    }

    /// Resolve the slider range: missing ends come from the dataset bounds and
    /// ends past the bounds (a step-aligned slider track) are clamped onto them.
    pub fn payload_range(&self, bounds: PayloadBounds) -> Result<PayloadRange, AppError> {
        let range = bounds.range_or_full(self.low, self.high);
        if !range.is_finite() {
            return Err(AppError::BadRequest {
                message: "payload range must be finite".to_string(),
                details: Some(format!("low={}, high={}", range.low, range.high)),
            });
        }
        Ok(bounds.clamp(range))
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
}
