// Service exports
pub mod artifacts;
pub mod model;

pub use artifacts::{Artifacts, ArtifactError, load_schema, load_model};
pub use model::{Regressor, LinearModel, TreeEnsemble, Tree, TreeNode, Aggregation, ModelArtifact};
