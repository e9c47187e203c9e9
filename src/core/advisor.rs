use serde::{Deserialize, Serialize};
use crate::models::InputRecord;

/// Numeric input a range rule can inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisedField {
    AreaSize,
    Bedrooms,
    Baths,
}

impl AdvisedField {
    #[inline]
    pub fn read(&self, record: &InputRecord) -> f64 {
        match self {
            AdvisedField::AreaSize => record.area_size,
            AdvisedField::Bedrooms => record.bedrooms as f64,
            AdvisedField::Baths => record.baths as f64,
        }
    }
}

/// Soft upper bound on one input; fires when the value is strictly above `max`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeRule {
    pub field: AdvisedField,
    pub max: f64,
    pub message: String,
}

impl RangeRule {
    pub fn new(field: AdvisedField, max: f64, message: impl Into<String>) -> Self {
        Self {
            field,
            max,
            message: message.into(),
        }
    }

    #[inline]
    pub fn fires(&self, record: &InputRecord) -> bool {
        self.field.read(record) > self.max
    }
}

/// Default policy table: area, then bedrooms, then baths
pub fn default_rules() -> Vec<RangeRule> {
    vec![
        RangeRule::new(
            AdvisedField::AreaSize,
            25.0,
            "Area size exceeds typical range — prediction may be inaccurate.",
        ),
        RangeRule::new(
            AdvisedField::Bedrooms,
            7.0,
            "Bedroom count unusually high — results might not reflect real value.",
        ),
        RangeRule::new(
            AdvisedField::Baths,
            7.0,
            "Bathroom count unusually high — prediction may be off.",
        ),
    ]
}

/// Checks inputs against plausibility thresholds
///
/// Warnings are advisory only and never block a prediction. Rules are
/// evaluated independently, in table order.
#[derive(Debug, Clone)]
pub struct RangeAdvisor {
    rules: Vec<RangeRule>,
}

impl RangeAdvisor {
    pub fn new(rules: Vec<RangeRule>) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self::new(default_rules())
    }

    pub fn rules(&self) -> &[RangeRule] {
        &self.rules
    }

    pub fn advise(&self, record: &InputRecord) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| rule.fires(record))
            .map(|rule| rule.message.clone())
            .collect()
    }
}

impl Default for RangeAdvisor {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
