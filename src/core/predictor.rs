use std::sync::Arc;
use crate::core::{advisor::RangeAdvisor, encoder::encode};
use crate::error::{checked_trunc, PredictError};
use crate::models::{FeatureSchema, InputRecord, PredictionResult};
use crate::services::Regressor;

/// Runs one prediction cycle over shared, read-only artifacts
///
/// # Pipeline Stages
/// 1. Encode the record against the feature schema
/// 2. Ask the model for an estimate
/// 3. Collect range warnings for the inputs
#[derive(Debug, Clone)]
pub struct Predictor {
    schema: Arc<FeatureSchema>,
    model: Arc<dyn Regressor>,
    advisor: RangeAdvisor,
}

impl Predictor {
    pub fn new(schema: Arc<FeatureSchema>, model: Arc<dyn Regressor>, advisor: RangeAdvisor) -> Self {
        Self {
            schema,
            model,
            advisor,
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn model_kind(&self) -> &'static str {
        self.model.kind()
    }

    pub fn advisor(&self) -> &RangeAdvisor {
        &self.advisor
    }

    pub fn predict(&self, record: &InputRecord) -> Result<PredictionResult, PredictError> {
        let vector = encode(record, &self.schema)?;
        let value = self.model.predict(&vector)?;
        if checked_trunc(value).is_none() {
            return Err(PredictError::NonFinite(value.to_string()));
        }

        let warnings = self.advisor.advise(record);

        if !warnings.is_empty() {
            tracing::debug!("Inputs outside typical range: {:?}", warnings);
        }

        Ok(PredictionResult { value, warnings })
    }
}
