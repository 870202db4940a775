use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vaidya_core::models::session::{SessionContext, SessionUser};
use vaidya_export::styles::DocumentStyles;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaidyaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Dataset file used when `--dataset` is not given.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    /// Relative report paths are resolved against this directory.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub styles: DocumentStyles,
    /// Who reports are prepared for. v0 configs stored a bare
    /// `display_name`; [`migrate`] lifts it into this object.
    #[serde(default)]
    pub user: Option<SessionUser>,
    pub created_at: jiff::Timestamp,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl VaidyaConfig {
    pub fn new(created_at: jiff::Timestamp) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            dataset_path: None,
            report_dir: None,
            max_results: DEFAULT_MAX_RESULTS,
            styles: DocumentStyles::default(),
            user: None,
            created_at,
        }
    }

    pub fn session(&self) -> SessionContext {
        match &self.user {
            Some(user) => SessionContext::authenticated(user.clone()),
            None => SessionContext::anonymous(),
        }
    }

    /// Resolve a report output path against [`VaidyaConfig::report_dir`].
    pub fn report_path(&self, path: &Path) -> PathBuf {
        match &self.report_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("vaidya").join("config.json"))
}

/// Load the config at `path`, or a fresh default when none has been saved.
pub fn load_or_default(path: &Path) -> eyre::Result<VaidyaConfig> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(VaidyaConfig::new(jiff::Timestamp::now()))
    }
}

pub fn load_config(path: &Path) -> eyre::Result<VaidyaConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version") {
        None => 0,
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                eyre::eyre!("invalid config_version {value} in {}", path.display())
            })?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: VaidyaConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update vaidya."
        ));
    }

    // v0 → v1: bare display_name becomes a session user with a stable id
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(serde_json::Value::String(name)) = obj.remove("display_name") {
            let user = SessionUser::new(name);
            obj.insert("user".to_string(), serde_json::to_value(user)?);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (display_name moved to user)");
    }

    Ok(json)
}

pub fn save_config(config: &VaidyaConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
