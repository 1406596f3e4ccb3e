//! Showcase manifest: the slide data for both carousels and the page sections

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::carousel::Slide;

/// Manifest embedded at build time
const BUILTIN: &str = include_str!("../../assets/manifest.json");

/// Environment variable pointing at a manifest file
pub const MANIFEST_ENV: &str = "KASSABI_MANIFEST";

fn default_brand() -> String {
    "KASSABI".to_string()
}

/// Navigation entry for a page section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    pub label: String,
    /// Muted loop that plays while the section is well in view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

impl SectionEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            video: None,
        }
    }

    pub fn with_video(mut self, video: impl Into<String>) -> Self {
        self.video = Some(video.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Prefix used in play trigger titles
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
    #[serde(default)]
    pub hero: Vec<Slide>,
    #[serde(default)]
    pub showreel: Vec<Slide>,
    /// Directory relative media paths resolve against
    #[serde(skip)]
    pub root: PathBuf,
}

impl Manifest {
    /// The manifest bundled with the application
    pub fn builtin() -> Self {
        match serde_json::from_str(BUILTIN) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::error!("Bundled manifest is invalid: {}", e);
                Self {
                    brand: default_brand(),
                    sections: Vec::new(),
                    hero: Vec::new(),
                    showreel: Vec::new(),
                    root: PathBuf::new(),
                }
            }
        }
    }

    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest {:?}", path))?;
        let mut manifest: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest {:?}", path))?;
        manifest.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(manifest)
    }

    /// Default user manifest location in the config directory
    pub fn user_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "kassabi", "Kassabi")
            .map(|dirs| dirs.config_dir().join("manifest.json"))
    }

    /// Pick the manifest to show: explicit path, then the user config
    /// directory, then the bundled one
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            match Self::load(&path) {
                Ok(manifest) => {
                    tracing::info!("Loaded manifest from {:?}", path);
                    return manifest;
                }
                Err(e) => tracing::warn!("{:#}; falling back", e),
            }
        }

        if let Some(path) = Self::user_path().filter(|p| p.exists()) {
            match Self::load(&path) {
                Ok(manifest) => {
                    tracing::info!("Loaded manifest from {:?}", path);
                    return manifest;
                }
                Err(e) => tracing::warn!("{:#}; using bundled manifest", e),
            }
        }

        Self::builtin()
    }

    /// Manifest path requested via CLI argument or environment
    pub fn requested_path() -> Option<PathBuf> {
        std::env::args_os()
            .nth(1)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(MANIFEST_ENV).map(PathBuf::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_manifest_is_complete() {
        let manifest = Manifest::builtin();
        assert_eq!(manifest.brand, "KASSABI");
        assert!(!manifest.hero.is_empty());
        assert!(!manifest.showreel.is_empty());
        assert!(manifest.sections.iter().any(|s| s.id == "showreel"));
        assert!(manifest.sections.iter().any(|s| s.video.is_some()));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(
            &path,
            r#"{"hero":[{"title":"Only"}],"showreel":[{"tag":"A"},{"tag":"B"}]}"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.brand, "KASSABI");
        assert_eq!(manifest.hero.len(), 1);
        assert_eq!(manifest.showreel[1].tag(), Some("B"));
        assert_eq!(manifest.root, dir.path());
    }

    #[test]
    fn test_load_error_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[").unwrap();
        let err = Manifest::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse manifest"));
    }

    #[test]
    fn test_resolve_falls_back_on_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::resolve(Some(dir.path().join("missing.json")));
        assert!(!manifest.hero.is_empty());
    }
}
