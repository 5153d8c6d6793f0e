//! Image asset loading.
//!
//! All four images are decoded up front; a missing or corrupt file is a
//! startup error, there is no partial mode.

use image::GenericImageView;
use std::path::{Path, PathBuf};

use crate::core::error::{GameError, Result};
use crate::core::types::Choice;

/// Locations of the image files under an asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    dir: PathBuf,
}

impl AssetPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn background(&self) -> PathBuf {
        self.dir.join("background.png")
    }

    pub fn choice(&self, choice: Choice) -> PathBuf {
        self.dir.join(format!("{}.png", choice.asset_stem()))
    }
}

/// A decoded RGBA8 image.
#[derive(Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

impl ImageData {
    /// Decode an image file to RGBA8.
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|source| GameError::Asset {
            path: path.to_path_buf(),
            source,
        })?;
        let (width, height) = img.dimensions();

        tracing::debug!("Loaded {} ({}x{})", path.display(), width, height);

        Ok(Self {
            width,
            height,
            rgba: img.to_rgba8().into_raw(),
        })
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Background plus one sprite per choice.
#[derive(Debug, Clone)]
pub struct GameAssets {
    background: ImageData,
    choices: [ImageData; 3],
}

impl GameAssets {
    pub fn load(paths: &AssetPaths) -> Result<Self> {
        let background = ImageData::load(&paths.background())?;
        let choices = [
            ImageData::load(&paths.choice(Choice::Rock))?,
            ImageData::load(&paths.choice(Choice::Paper))?,
            ImageData::load(&paths.choice(Choice::Scissors))?,
        ];

        tracing::info!("Loaded game assets from {}", paths.dir().display());

        Ok(Self {
            background,
            choices,
        })
    }

    pub fn background(&self) -> &ImageData {
        &self.background
    }

    /// Sprite for a choice; `None` falls back to the Rock image as placeholder.
    pub fn choice_image(&self, choice: Option<Choice>) -> &ImageData {
        &self.choices[choice.unwrap_or(Choice::Rock).index()]
    }
}
