use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::error::PredictError;
use crate::models::FeatureVector;

/// A trained regression model
///
/// Models are positional: `vector.values()[i]` is the i-th feature the model
/// was trained on. Implementations must be pure so one instance can be shared
/// across all workers.
pub trait Regressor: Send + Sync + std::fmt::Debug {
    fn predict(&self, vector: &FeatureVector) -> Result<f64, PredictError>;

    /// Short name of the model family, for logs and the schema endpoint
    fn kind(&self) -> &'static str;

    /// Exact input width the model requires, when the model knows it
    fn expected_width(&self) -> Option<usize> {
        None
    }
}

/// `intercept + Σ coefficients[i] * x[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Regressor for LinearModel {
    fn predict(&self, vector: &FeatureVector) -> Result<f64, PredictError> {
        if vector.len() != self.coefficients.len() {
            return Err(PredictError::SchemaMismatch(format!(
                "linear model has {} coefficients but vector has {} columns",
                self.coefficients.len(),
                vector.len()
            )));
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(vector.values())
            .map(|(w, x)| w * x)
            .sum();

        Ok(self.intercept + dot)
    }

    fn kind(&self) -> &'static str {
        "linear"
    }

    fn expected_width(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }
}

/// One node of a flattened decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Leaf {
        leaf: f64,
    },
    /// Go to `left` when `x[feature] <= threshold`, otherwise `right`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Decision tree stored as a flat node array rooted at index 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    pub fn evaluate(&self, values: &[f64]) -> Result<f64, PredictError> {
        let mut index = 0;

        // A well-formed tree reaches a leaf in fewer hops than it has nodes
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { leaf }) => return Ok(*leaf),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let value = values.get(*feature).ok_or_else(|| {
                        PredictError::SchemaMismatch(format!(
                            "tree splits on feature {} but vector has {} columns",
                            feature,
                            values.len()
                        ))
                    })?;
                    index = if *value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(PredictError::SchemaMismatch(format!(
                        "tree references node {} of {}",
                        index,
                        self.nodes.len()
                    )));
                }
            }
        }

        Err(PredictError::SchemaMismatch("tree contains a cycle".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Average of tree outputs (random forest)
    Mean,
    /// `base_score` plus the sum of tree outputs (gradient boosting)
    Sum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

impl Regressor for TreeEnsemble {
    fn predict(&self, vector: &FeatureVector) -> Result<f64, PredictError> {
        if self.trees.is_empty() {
            return Err(PredictError::SchemaMismatch("tree ensemble has no trees".to_string()));
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.evaluate(vector.values())?;
        }

        Ok(match self.aggregation {
            Aggregation::Mean => total / self.trees.len() as f64,
            Aggregation::Sum => self.base_score + total,
        })
    }

    fn kind(&self) -> &'static str {
        match self.aggregation {
            Aggregation::Mean => "random_forest",
            Aggregation::Sum => "gradient_boosting",
        }
    }
}

/// Serialized model as exported by the training pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl ModelArtifact {
    pub fn into_regressor(self) -> Arc<dyn Regressor> {
        match self {
            ModelArtifact::Linear(model) => Arc::new(model),
            ModelArtifact::TreeEnsemble(model) => Arc::new(model),
        }
    }
}
