//! Host metadata manifests
//!
//! A manifest carries everything a host would otherwise supply in-process:
//! the build unit name, which annotation kinds are visible, and every
//! declared type with its contracts and raw annotations.
//!
//! ```yaml
//! unit: Sample.App
//! types:
//!   - name: Sample.App.WeatherService
//!     implements: [Sample.App.IFirstInterface]
//!     annotations:
//!       - kind: TransientService
//!         positional: [2]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use skanr_application::PassInput;
use skanr_domain::{AnnotationKind, DeclaredType, Error, KindRegistry, Result};
use tracing::debug;

use crate::constants::{JSON_EXTENSIONS, TOML_EXTENSIONS, YAML_EXTENSIONS};
use crate::error_ext::ErrorContext;

/// Manifest file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
    Toml,
}

impl ManifestFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if JSON_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Json)
        } else if YAML_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Yaml)
        } else if TOML_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Toml)
        } else {
            Err(Error::manifest(format!(
                "Unsupported manifest extension for {}; expected json, yaml, yml or toml",
                path.display()
            )))
        }
    }
}

fn default_annotation_kinds() -> Vec<String> {
    AnnotationKind::ALL
        .iter()
        .map(|kind| kind.tag().to_string())
        .collect()
}

/// Type metadata for one build unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostManifest {
    /// Build unit name
    #[serde(default)]
    pub unit: String,

    /// Annotation kinds visible to the unit
    #[serde(default = "default_annotation_kinds")]
    pub annotation_kinds: Vec<String>,

    /// Members of the annotation family without a canonical meaning
    #[serde(default)]
    pub derived_kinds: Vec<String>,

    /// Declared types in enumeration order
    #[serde(default)]
    pub types: Vec<DeclaredType>,
}

impl HostManifest {
    /// Read and parse a manifest, choosing the format by extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let format = ManifestFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .with_io_context(|| format!("Failed to read manifest {}", path.display()))?;

        let manifest = Self::parse(&content, format)?;
        debug!(
            path = %path.display(),
            unit = %manifest.unit,
            types = manifest.types.len(),
            "Manifest loaded"
        );
        Ok(manifest)
    }

    /// Parse manifest text in the given format
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self> {
        match format {
            ManifestFormat::Json => {
                serde_json::from_str(content).manifest_context("Invalid JSON manifest")
            }
            ManifestFormat::Yaml => {
                serde_yaml::from_str(content).manifest_context("Invalid YAML manifest")
            }
            ManifestFormat::Toml => {
                toml::from_str(content).manifest_context("Invalid TOML manifest")
            }
        }
    }

    /// Recognized-kind registry; `None` when the base kind is not visible
    pub fn kind_registry(&self) -> Option<KindRegistry> {
        KindRegistry::from_visible(&self.annotation_kinds, &self.derived_kinds)
    }

    /// Convert into the input of a generation pass
    pub fn into_pass_input(self) -> PassInput {
        let kinds = self.kind_registry();
        PassInput::new(self.unit, self.types).with_kinds(kinds)
    }
}
