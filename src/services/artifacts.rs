use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use crate::config::ArtifactSettings;
use crate::models::FeatureSchema;
use crate::services::model::{ModelArtifact, Regressor};

/// Errors that can occur while loading the trained artifacts
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Feature schema {} has no columns", .0.display())]
    EmptySchema(PathBuf),

    #[error("Model expects {expected} features but schema has {actual} columns")]
    Incompatible { expected: usize, actual: usize },
}

/// Model and feature schema, loaded once and shared read-only
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub schema: Arc<FeatureSchema>,
    pub model: Arc<dyn Regressor>,
}

impl Artifacts {
    /// Load both artifacts and check they agree on the input width
    pub async fn load(settings: &ArtifactSettings) -> Result<Self, ArtifactError> {
        let schema = load_schema(&settings.schema_path).await?;
        let model = load_model(&settings.model_path).await?;

        if let Some(expected) = model.expected_width() {
            if expected != schema.len() {
                return Err(ArtifactError::Incompatible {
                    expected,
                    actual: schema.len(),
                });
            }
        }

        tracing::info!(
            "Loaded {} model with {} feature columns",
            model.kind(),
            schema.len()
        );

        Ok(Self {
            schema: Arc::new(schema),
            model,
        })
    }
}

/// Read the ordered column list, a JSON array of strings
pub async fn load_schema(path: impl AsRef<Path>) -> Result<FeatureSchema, ArtifactError> {
    let path = path.as_ref();
    let schema: FeatureSchema = read_json(path).await?;

    if schema.is_empty() {
        return Err(ArtifactError::EmptySchema(path.to_path_buf()));
    }

    tracing::debug!("Feature schema {} has {} columns", path.display(), schema.len());
    Ok(schema)
}

pub async fn load_model(path: impl AsRef<Path>) -> Result<Arc<dyn Regressor>, ArtifactError> {
    let artifact: ModelArtifact = read_json(path.as_ref()).await?;
    Ok(artifact.into_regressor())
}

async fn read_json<T>(path: &Path) -> Result<T, ArtifactError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let raw = tokio::fs::read(path).await.map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
