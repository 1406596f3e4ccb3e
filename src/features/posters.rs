//! Poster image index
//!
//! The stage canvas needs intrinsic image sizes to cover-fit posters, so
//! dimensions are read once from the file headers at startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::carousel::Slide;

/// Decoded poster location and size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poster {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default)]
pub struct PosterIndex {
    posters: HashMap<String, Poster>,
}

impl PosterIndex {
    /// Index every poster referenced by `slides`, resolving relative paths
    /// against `base`. Unreadable files are skipped.
    pub fn scan<'a>(base: &Path, slides: impl IntoIterator<Item = &'a Slide>) -> Self {
        let mut posters = HashMap::new();
        for poster in slides.into_iter().filter_map(Slide::poster) {
            if posters.contains_key(poster) {
                continue;
            }
            let path = base.join(poster);
            match image::image_dimensions(&path) {
                Ok((width, height)) => {
                    posters.insert(
                        poster.to_string(),
                        Poster {
                            path,
                            width,
                            height,
                        },
                    );
                }
                Err(e) => tracing::debug!("Skipping poster {:?}: {}", path, e),
            }
        }
        tracing::info!("Indexed {} poster(s)", posters.len());
        Self { posters }
    }

    pub fn get(&self, poster: &str) -> Option<&Poster> {
        self.posters.get(poster)
    }

    pub fn len(&self) -> usize {
        self.posters.len()
    }
}
