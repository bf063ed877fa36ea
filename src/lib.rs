//! Truss AI - browser front end for the truss prediction service
//!
//! Collects a load and a cross-sectional area, posts them to the backend's
//! `/predict` endpoint and charts what comes back:
//! - nodal displacements (line)
//! - element axial forces (bars)
//! - element stresses (bars, shown in MPa)
//!
//! ## Example
//! ```rust,no_run
//! use truss_ai::prelude::*;
//!
//! # async fn run() {
//! let client = PredictionClient::new(&ClientConfig::default());
//! match client.predict(&PredictionRequest::new(-1000.0, 1e-4)).await {
//!     PredictionOutcome::Success(result) => {
//!         let series = to_series(Some(result.displacements.as_slice()), "Node");
//!         println!("{} nodes", series.len());
//!     }
//!     PredictionOutcome::Failure(err) => eprintln!("{err}"),
//! }
//! # }
//! ```

pub mod chart;
pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod shaping;
pub mod state;
pub mod types;

pub mod prelude {
    pub use crate::client::{PredictionClient, RawResponse, Transport};
    pub use crate::config::ClientConfig;
    pub use crate::error::{ClientResult, PredictionError};
    pub use crate::shaping::{to_series, SeriesPoint};
    pub use crate::state::ShellState;
    pub use crate::types::{PredictionOutcome, PredictionRequest, PredictionResult};
}
