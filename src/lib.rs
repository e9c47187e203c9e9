//! Zameen Price - property price prediction service
//!
//! Collects listing attributes from an HTML form or JSON API, rebuilds the
//! one-hot feature vector a trained regression model expects, and renders the
//! predicted price with soft range warnings.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Predictor, RangeAdvisor, Formatter, encode};
pub use error::PredictError;
pub use models::{InputRecord, FeatureSchema, FeatureVector, PredictionResult};
pub use services::{Artifacts, ArtifactError, Regressor};
