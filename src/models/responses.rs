use serde::{Deserialize, Serialize};

/// Response for the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "predictionId")]
    pub prediction_id: String,
    #[serde(rename = "predictedPrice")]
    pub predicted_price: f64,
    #[serde(rename = "displayPrice")]
    pub display_price: String,
    pub currency: String,
    pub warnings: Vec<String>,
    pub html: String,
}

/// Loaded feature schema and model summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub columns: Vec<String>,
    pub width: usize,
    #[serde(rename = "modelKind")]
    pub model_kind: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
