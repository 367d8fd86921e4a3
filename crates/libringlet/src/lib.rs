#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde;

pub mod oklch;
pub mod ring;
pub mod settings;

pub use oklch::Oklch;
pub use settings::{Appearance, ColorMode, ThemeColor, ThemeSettings};

pub const SETTINGS_FILE_NAME: &str = "ringlet.yaml";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_yaml::Error),
}
