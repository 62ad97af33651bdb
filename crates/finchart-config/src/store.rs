use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use finchart_domain::{DisplaySpec, FilterSpec};

use crate::ConfigError;

const PROFILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// A named filter/display pair as persisted for one chart screen.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartProfile {
    pub filter: FilterSpec,
    pub display: DisplaySpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ChartProfile {
    pub fn new(filter: FilterSpec, display: DisplaySpec) -> Self {
        Self {
            filter,
            display,
            updated_at: None,
        }
    }
}

/// Handles persistence of [`ChartProfile`] values under a profiles
/// directory, one pretty-printed JSON file per profile name.
#[derive(Debug, Clone)]
pub struct ChartProfileStore {
    profiles_dir: PathBuf,
}

impl ChartProfileStore {
    pub fn new(profiles_dir: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&profiles_dir)?;
        Ok(Self { profiles_dir })
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        Self::new(base.join("profiles"))
    }

    /// Default profile root, resolved beneath the user's configuration
    /// directory (falling back to the home directory).
    pub fn default_root() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("finchart")
    }

    pub fn profiles_dir(&self) -> &Path {
        &self.profiles_dir
    }

    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir
            .join(format!("{}.{}", canonical_name(name), PROFILE_EXTENSION))
    }

    /// Loads the named profile, or the documented defaults when nothing
    /// has been saved under that name yet.
    pub fn load(&self, name: &str) -> Result<ChartProfile, ConfigError> {
        let path = self.profile_path(name);
        if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(ChartProfile::default())
        }
    }

    pub fn save(&self, name: &str, profile: &ChartProfile) -> Result<(), ConfigError> {
        let mut stored = profile.clone();
        stored.updated_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let path = self.profile_path(name);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Names of all saved profiles, sorted.
    pub fn list(&self) -> Result<Vec<String>, ConfigError> {
        if !self.profiles_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.profiles_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                entries.push(stem.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }
}

fn canonical_name(name: &str) -> String {
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !sanitized.is_empty() && !last_dash {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-');
    if trimmed.is_empty() {
        "profile".to_string()
    } else {
        trimmed.to_string()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
