// Core prediction pipeline exports
pub mod advisor;
pub mod encoder;
pub mod formatter;
pub mod predictor;

pub use advisor::{RangeAdvisor, RangeRule, AdvisedField, default_rules};
pub use encoder::{encode, expand};
pub use formatter::{Formatter, group_thousands, DEFAULT_CURRENCY};
pub use predictor::Predictor;
