use std::time::Duration;

use camino::Utf8Path;

use crate::error::ConfigError;

/// Images shown when the gallery first opens.
pub const DEFAULT_IMAGES: [&str; 3] = [
    "https://upload.wikimedia.org/wikipedia/commons/3/3f/Fronalpstock_big.jpg",
    "https://picsum.photos/800/500",
    "https://placehold.co/800x500/png",
];

pub const PLACEHOLDER_URL: &str = "https://placehold.co/800x500/png?text=Could+not+load";

#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locators seeded into the gallery on start-up, in display order.
    pub default_images: Vec<String>,

    /// Shown instead of a card's image when it fails to load.
    pub placeholder_url: String,

    /// How long a new card stays in its "adding" transition.
    pub adding_delay_ms: u64,

    /// How long the removal transition plays before a card is discarded.
    pub removal_delay_ms: u64,

    /// Rules for the registration form.
    pub registration: RegistrationRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
            placeholder_url: PLACEHOLDER_URL.to_string(),
            adding_delay_ms: 220,
            removal_delay_ms: 160,
            registration: RegistrationRules::default(),
        }
    }
}

impl Config {
    /// Reads a `Config` from a TOML file on disk.
    ///
    /// Keys that are missing from the file keep their default values.
    #[tracing::instrument]
    pub async fn from_disk(path: &Utf8Path) -> Result<Self, ConfigError> {
        let s = tokio::fs::read_to_string(path)
            .await
            .inspect_err(|e| tracing::warn!("Failed to read config file. err: {e}"))
            .map_err(ConfigError::ReadFailed)?;

        Self::parse(&s)
    }

    /// Parses a `Config` from TOML text.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let conf: Self = toml::from_str(s)
            .inspect_err(|e| tracing::warn!("Failed to parse config. err: {e}"))
            .map_err(ConfigError::ParseFailed)?;

        tracing::debug!("loaded config: {conf:?}");
        Ok(conf)
    }

    pub fn adding_delay(&self) -> Duration {
        Duration::from_millis(self.adding_delay_ms)
    }

    pub fn removal_delay(&self) -> Duration {
        Duration::from_millis(self.removal_delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RegistrationRules {
    /// Shortest accepted name, after trimming.
    pub min_name_length: usize,

    /// Youngest accepted age, in whole years.
    pub min_age: u32,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            min_name_length: 3,
            min_age: 18,
        }
    }
}
