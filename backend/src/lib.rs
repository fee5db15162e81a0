//! # Launch Dashboard
//!
//! Interactive analytics dashboard over a static table of rocket launch records.
//!
//! The table is loaded once at startup and shared read-only. Every chart the
//! dashboard shows is a pure derivation from that table and the current
//! selection: a site dropdown and a payload-mass range slider.
//!
//! ## Architecture
//!
//! - [`models`]: launch records, launch sites and selection state
//! - [`io`]: loading the delimited launch table
//! - [`dataset`]: the immutable [`LaunchDataset`](dataset::LaunchDataset)
//! - [`services`]: pie and scatter derivations, dashboard layout
//! - [`config`]: server configuration from the environment
//! - [`http`]: Axum-based server, JSON endpoints and the dashboard page

pub mod config;
pub mod dataset;
pub mod io;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
