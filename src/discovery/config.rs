//! Database configuration (`.portfoliodb.yml`) parsing.
//!
//! Only the `validate` section is read. Other sections of the file belong
//! to build steps this crate does not run and are ignored.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PortfolioError, Result};
use crate::validation::Severity;

/// Database configuration loaded from `.portfoliodb.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub validate: ValidateConfig,
}

/// The `validate` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    pub checks: Checks,
}

/// Per-check settings. `None` means the check's default level.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Checks {
    #[serde(rename = "yaml header")]
    pub yaml_header: Option<CheckSetting>,
    #[serde(rename = "title presence")]
    pub title_presence: Option<CheckSetting>,
    #[serde(rename = "title uniqueness")]
    pub title_uniqueness: Option<CheckSetting>,
    #[serde(rename = "tags presence")]
    pub tags_presence: Option<CheckSetting>,
    #[serde(rename = "working media")]
    pub working_media: Option<CheckSetting>,
    #[serde(rename = "work folder uniqueness")]
    pub work_folder_uniqueness: Option<CheckSetting>,
    #[serde(rename = "work folder safeness")]
    pub work_folder_safeness: Option<CheckSetting>,
}

/// A check setting: a level, or `true`/`false` for default/off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CheckSetting {
    Enabled(bool),
    Level(CheckLevel),
}

/// How loudly a check reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    Off,
    Info,
    Warn,
    Error,
    Fatal,
}

impl CheckLevel {
    /// Severity of diagnostics at this level, `None` when off.
    pub fn severity(self) -> Option<Severity> {
        match self {
            CheckLevel::Off => None,
            CheckLevel::Info => Some(Severity::Info),
            CheckLevel::Warn => Some(Severity::Warning),
            CheckLevel::Error => Some(Severity::Error),
            CheckLevel::Fatal => Some(Severity::Fatal),
        }
    }
}

/// The configurable validation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    YamlHeader,
    TitlePresence,
    TitleUniqueness,
    TagsPresence,
    WorkingMedia,
    WorkFolderUniqueness,
    WorkFolderSafeness,
}

impl Check {
    /// Level used when the configuration does not say otherwise.
    pub fn default_level(self) -> CheckLevel {
        match self {
            Check::YamlHeader
            | Check::TitlePresence
            | Check::TitleUniqueness
            | Check::WorkFolderSafeness => CheckLevel::Error,
            Check::TagsPresence | Check::WorkingMedia => CheckLevel::Warn,
            Check::WorkFolderUniqueness => CheckLevel::Fatal,
        }
    }

    /// Diagnostic code suffix.
    pub fn code(self) -> &'static str {
        match self {
            Check::YamlHeader => "yaml-header",
            Check::TitlePresence => "title-presence",
            Check::TitleUniqueness => "title-uniqueness",
            Check::TagsPresence => "tags-presence",
            Check::WorkingMedia => "working-media",
            Check::WorkFolderUniqueness => "work-folder-uniqueness",
            Check::WorkFolderSafeness => "work-folder-safeness",
        }
    }
}

impl Checks {
    fn setting(&self, check: Check) -> Option<CheckSetting> {
        match check {
            Check::YamlHeader => self.yaml_header,
            Check::TitlePresence => self.title_presence,
            Check::TitleUniqueness => self.title_uniqueness,
            Check::TagsPresence => self.tags_presence,
            Check::WorkingMedia => self.working_media,
            Check::WorkFolderUniqueness => self.work_folder_uniqueness,
            Check::WorkFolderSafeness => self.work_folder_safeness,
        }
    }

    /// Effective level of a check.
    pub fn level(&self, check: Check) -> CheckLevel {
        match self.setting(check) {
            None | Some(CheckSetting::Enabled(true)) => check.default_level(),
            Some(CheckSetting::Enabled(false)) => CheckLevel::Off,
            Some(CheckSetting::Level(level)) => level,
        }
    }
}

impl Configuration {
    /// Load configuration from a `.portfoliodb.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PortfolioError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read configuration: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PortfolioError::Config {
            message: format!("Invalid configuration: {}", e),
            help: Some("Check .portfoliodb.yml syntax".to_string()),
        })
    }

    /// Effective level of a check.
    pub fn check_level(&self, check: Check) -> CheckLevel {
        self.validate.checks.level(check)
    }
}
