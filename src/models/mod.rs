// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Categorical, City, Province, PropertyType, Purpose, InputRecord, FeatureSchema, FeatureVector, PredictionResult};
pub use requests::PredictRequest;
pub use responses::{PredictResponse, SchemaResponse, HealthResponse, ErrorResponse};
