// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LIBRARY: &str = "gfx.dll";
pub const DEFAULT_EXECUTABLE: &str = "game.exe";
pub const PATCHED_SUFFIX: &str = "_patched";
pub const BACKUP_SUFFIX: &str = "_original";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Serialize error: {0}")]
    SerializeError(String),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Replacement values written over the library's 1600x1200 limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LibraryLimit {
    Uhd,
    Unlimited,
    Custom { width: u32, height: u32 },
}

impl LibraryLimit {
    pub fn dimensions(&self) -> (u32, u32) {
        match *self {
            LibraryLimit::Uhd => (3840, 2160),
            LibraryLimit::Unlimited => (1_000_000, 1_000_000),
            LibraryLimit::Custom { width, height } => (width, height),
        }
    }
}

impl Default for LibraryLimit {
    fn default() -> Self {
        LibraryLimit::Uhd
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum OutputPolicy {
    /// Leave the input alone and write `stem + suffix + ext` next to it.
    Suffixed { suffix: String },
    /// Overwrite the input, optionally copying it to `stem_original.ext` first.
    InPlace { backup: bool },
}

impl OutputPolicy {
    pub fn suffixed(suffix: &str) -> Self {
        OutputPolicy::Suffixed { suffix: suffix.to_string() }
    }
}

impl Default for OutputPolicy {
    fn default() -> Self {
        OutputPolicy::suffixed(PATCHED_SUFFIX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub suffix: String,
}

impl TargetProfile {
    pub fn new(name: &str, width: u32, height: u32, suffix: &str) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            suffix: suffix.to_string(),
        }
    }

    pub fn defaults() -> Vec<TargetProfile> {
        vec![
            TargetProfile::new("1080p", 1920, 1080, "_1080p"),
            TargetProfile::new("1440p", 2560, 1440, "_1440p"),
            TargetProfile::new("2160p", 3840, 2160, "_2160p"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryTarget {
    pub path: PathBuf,
    pub limit: LibraryLimit,
    pub output: OutputPolicy,
}

impl Default for LibraryTarget {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LIBRARY),
            limit: LibraryLimit::default(),
            output: OutputPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutableTarget {
    pub path: PathBuf,
    pub profiles: Vec<TargetProfile>,
}

impl Default for ExecutableTarget {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EXECUTABLE),
            profiles: TargetProfile::defaults(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub working_dir: PathBuf,
    pub library: Option<LibraryTarget>,
    pub executable: Option<ExecutableTarget>,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            library: Some(LibraryTarget::default()),
            executable: Some(ExecutableTarget::default()),
            parallel: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match ext.to_lowercase().as_str() {
            "json" => {
                let contents = fs::read_to_string(path)
                    .map_err(|e| ConfigError::IoError(e.to_string()))?;
                serde_json::from_str(&contents)
                    .map_err(|e| ConfigError::ParseError(e.to_string()))
            }
            _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(path, contents)
            .map_err(|e| ConfigError::IoError(e.to_string()))
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.library.is_none() && self.executable.is_none() {
            return Err(ConfigError::Invalid("no targets configured".to_string()));
        }

        if let Some(ref library) = self.library {
            if let OutputPolicy::Suffixed { ref suffix } = library.output {
                if suffix.is_empty() {
                    return Err(ConfigError::Invalid("library output suffix is empty".to_string()));
                }
            }
        }

        if let Some(ref exe) = self.executable {
            if exe.profiles.is_empty() {
                return Err(ConfigError::Invalid("executable target has no profiles".to_string()));
            }

            let mut suffixes = HashSet::new();
            for profile in &exe.profiles {
                if profile.suffix.is_empty() {
                    return Err(ConfigError::Invalid(format!("profile {} has an empty suffix", profile.name)));
                }
                if profile.width == 0 || profile.height == 0 {
                    return Err(ConfigError::Invalid(format!("profile {} has a zero dimension", profile.name)));
                }
                if !suffixes.insert(profile.suffix.as_str()) {
                    return Err(ConfigError::Invalid(format!("duplicate profile suffix {}", profile.suffix)));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        let library = config.library.as_ref().unwrap();
        assert_eq!(library.path, PathBuf::from("gfx.dll"));
        assert_eq!(library.limit.dimensions(), (3840, 2160));
        assert_eq!(library.output, OutputPolicy::suffixed("_patched"));

        let exe = config.executable.as_ref().unwrap();
        let sizes: Vec<_> = exe.profiles.iter().map(|p| (p.width, p.height, p.suffix.as_str())).collect();
        assert_eq!(sizes, vec![(1920, 1080, "_1080p"), (2560, 1440, "_1440p"), (3840, 2160, "_2160p")]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unlimited_dimensions() {
        assert_eq!(LibraryLimit::Unlimited.dimensions(), (1_000_000, 1_000_000));
    }

    #[test]
    fn test_validate_rejects_empty() {
        let config = Config {
            library: None,
            executable: None,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_suffix() {
        let mut config = Config::default();
        config.executable.as_mut().unwrap().profiles.push(TargetProfile::new("again", 1920, 1080, "_1080p"));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let mut config = Config::default();
        config.executable.as_mut().unwrap().profiles[0].height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_relative_to_working_dir() {
        let config = Config {
            working_dir: PathBuf::from("/games/title"),
            ..Config::default()
        };
        assert_eq!(config.resolve(Path::new("gfx.dll")), PathBuf::from("/games/title/gfx.dll"));
    }

    #[test]
    fn test_save_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patcher.json");

        let mut config = Config::default();
        config.library.as_mut().unwrap().limit = LibraryLimit::Unlimited;
        config.library.as_mut().unwrap().output = OutputPolicy::InPlace { backup: true };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patcher.json");
        fs::write(&path, r#"{ "executable": null, "library": { "limit": "unlimited" } }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.executable.is_none());
        let library = config.library.unwrap();
        assert_eq!(library.path, PathBuf::from("gfx.dll"));
        assert_eq!(library.limit, LibraryLimit::Unlimited);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(Config::load(dir.path().join("missing.json")), Err(ConfigError::NotFound(_))));

        let toml = dir.path().join("patcher.toml");
        fs::write(&toml, "").unwrap();
        assert!(matches!(Config::load(&toml), Err(ConfigError::UnsupportedFormat(_))));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::ParseError(_))));
    }
}
