//! Interface for loading and saving the [`Config`] structure.
//!
//! The actual place where the config is saved to or read from is not tied to this interface and
//! it's considered to be an implementation detail.
use crate::result::ConfigurationErr;
use crate::use_cases::converter::Settings;
use crate::use_cases::loader::Locations;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type CfgResolver = Box<dyn ConfigResolver>;

pub type CfgLoader = Box<dyn ConfigLoader>;

/// Version of the PDFium build expected at the primary library location.
const PDFIUM_BUILD: &str = "chromium-7350";

/// Responsible for reading/saving the configuration from/to some medium.
pub trait ConfigLoader: Send {
    /// Reads the configuration pointed by `path`.
    fn load(&self, path: &Path) -> Result<Config, ConfigurationErr>;

    /// Saves the configuration in the place pointed by `path`.
    fn store(&self, path: &Path, cfg: &Config) -> Result<(), ConfigurationErr>;
}

/// Handles config override.
///
/// When user specifies configuration path during startup, this interface handles this case.
pub trait ConfigResolver: Send {
    /// Loads the [`Config`] using specified path.
    ///
    /// If the path is `None`, then no override takes place and configuration is loaded from the
    /// default path.
    fn handle_config(&self, path_override: Option<PathBuf>) -> Result<Config, ConfigurationErr>;
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Multiplier applied to the page size (in PDF points) to get the image size in pixels.
    pub render_scale: f64,
    pub library: LibraryConfig,
    /// How long to wait for PNG encoding before giving up.
    pub encode_timeout: Duration,
}

/// Directories searched for the PDFium shared library, in order.
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize, Clone)]
pub struct LibraryConfig {
    pub primary: PathBuf,
    pub fallback: PathBuf,
}

impl Config {
    /// Rejects values which can't produce an image.
    pub fn validated(self) -> Result<Self, ConfigurationErr> {
        if !(self.render_scale.is_finite() && self.render_scale > 0.0) {
            return Err(ConfigurationErr::InvalidRenderScale(self.render_scale));
        }
        Ok(self)
    }

    pub fn locations(&self) -> Locations {
        Locations {
            primary: self.library.primary.clone(),
            fallback: self.library.fallback.clone(),
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            scale: self.render_scale,
            encode_timeout: self.encode_timeout,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render_scale: 3.0,
            library: LibraryConfig::default(),
            encode_timeout: Duration::from_secs(10),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            primary: primary_library_default(),
            fallback: PathBuf::from("lib"),
        }
    }
}

fn primary_library_default() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_default()
        .join("pdf2img/pdfium")
        .join(PDFIUM_BUILD)
}
