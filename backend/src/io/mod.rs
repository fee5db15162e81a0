//! Dataset loading.
//!
//! Turns a delimited launch table into a [`LaunchDataset`](crate::dataset::LaunchDataset).
//! Loading happens once at startup; any error here is fatal for the server.
//!
//! # Example
//!
//! ```no_run
//! use launch_dashboard::io::LaunchLoader;
//! use std::path::Path;
//!
//! let dataset = LaunchLoader::load_from_file(Path::new("spacex_launch_dash.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} launches", dataset.len());
//! ```

pub mod loaders;


pub use loaders::{LaunchLoader, LoadError, REQUIRED_COLUMNS};
