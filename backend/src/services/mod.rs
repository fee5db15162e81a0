//! Query/filter engine behind the dashboard charts.
//!
//! Every function here is a pure derivation from a borrowed
//! [`LaunchDataset`](crate::dataset::LaunchDataset) and the current selection
//! to chart-ready data. Nothing is cached between calls.

pub mod layout;
pub mod pie;
pub mod scatter;


pub use layout::{build_layout, DashboardLayout};
pub use pie::{compute_pie_chart, PieChartData, PieGrouping, PieSlice};
pub use scatter::{compute_scatter_chart, ScatterChartData, ScatterPoint};
