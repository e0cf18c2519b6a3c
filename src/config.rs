//! Configuration constants and profile loading for pawfetch
//!
//! Profiles live in an INI file, one section per profile name:
//!
//! ```ini
//! [default]
//! cat_api_url = https://api.thecatapi.com/
//! dog_api_url = https://dog.ceo/api/
//! timeout_secs = 10
//! user_agent = pawfetch/0.1
//! exclusive_flows = true
//! resolution_policy = latest_issued
//! ```
//!
//! Every key is optional. A missing file or section yields the default profile.

use crate::app::services::{ClientOptions, DEFAULT_CAT_API_URL, DEFAULT_DOG_API_URL};
use crate::app::view_models::{FlowSettings, ResolutionPolicy};
use anyhow::{anyhow, Context, Result};
use ini::{Ini, Properties};
use std::path::Path;
use std::time::Duration;

/// Default profile file path for pawfetch
pub const DEFAULT_PROFILE_PATH: &str = "~/.pawfetch/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "PAWFETCH_PROFILE_PATH";

/// Name of the profile used when none is given
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Endpoints, transport options and flow policies for one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiProfile {
    cat_api_url: String,
    dog_api_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    flow_settings: FlowSettings,
}

impl Default for ApiProfile {
    fn default() -> Self {
        Self {
            cat_api_url: DEFAULT_CAT_API_URL.to_string(),
            dog_api_url: DEFAULT_DOG_API_URL.to_string(),
            timeout: None,
            user_agent: None,
            flow_settings: FlowSettings::default(),
        }
    }
}

impl ApiProfile {
    /// Build a profile from an INI section, keeping defaults for absent keys
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let mut profile = Self::default();

        if let Some(url) = non_empty(props.get("cat_api_url")) {
            profile.cat_api_url = url.to_string();
        }
        if let Some(url) = non_empty(props.get("dog_api_url")) {
            profile.dog_api_url = url.to_string();
        }
        if let Some(secs) = non_empty(props.get("timeout_secs")) {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("invalid timeout_secs '{secs}'"))?;
            profile.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(user_agent) = non_empty(props.get("user_agent")) {
            profile.user_agent = Some(user_agent.to_string());
        }
        if let Some(flag) = non_empty(props.get("exclusive_flows")) {
            profile.flow_settings.exclusive_flows = parse_bool(flag)
                .ok_or_else(|| anyhow!("invalid exclusive_flows '{flag}' (expected true or false)"))?;
        }
        if let Some(policy) = non_empty(props.get("resolution_policy")) {
            profile.flow_settings.resolution_policy =
                policy.parse::<ResolutionPolicy>().map_err(|e| anyhow!(e))?;
        }

        Ok(profile)
    }

    pub fn cat_api_url(&self) -> &str {
        &self.cat_api_url
    }

    pub fn dog_api_url(&self) -> &str {
        &self.dog_api_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn flow_settings(&self) -> FlowSettings {
        self.flow_settings
    }

    /// Transport options for the HTTP clients
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Reads named profiles from an INI file
#[derive(Debug, Clone)]
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    /// Create a store for `path`; a leading `~` is expanded on access
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Look up a profile; `Ok(None)` when the file or section does not exist
    pub fn get_profile(&self, name: &str) -> Result<Option<ApiProfile>> {
        let expanded = shellexpand::tilde(&self.path);
        let path = Path::new(expanded.as_ref());
        if !path.exists() {
            tracing::debug!("Profile file '{}' does not exist", path.display());
            return Ok(None);
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("failed to read profile file '{}'", path.display()))?;
        match ini.section(Some(name)) {
            Some(props) => ApiProfile::from_properties(props)
                .with_context(|| format!("invalid profile '{name}' in '{}'", path.display()))
                .map(Some),
            None => Ok(None),
        }
    }
}

/// Load profile `name` from `path`, falling back to the default profile
pub fn load_profile(name: &str, path: &str) -> Result<ApiProfile> {
    tracing::debug!("Loading profile '{}' from '{}'", name, path);

    match IniProfileStore::new(path).get_profile(name)? {
        Some(profile) => {
            tracing::debug!(
                "Profile loaded, cat API: {}, dog API: {}",
                profile.cat_api_url(),
                profile.dog_api_url()
            );
            Ok(profile)
        }
        None => {
            tracing::debug!("Profile '{}' not found, using default profile", name);
            Ok(ApiProfile::default())
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
