//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

use crate::settings::WebsiteSettings;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub backend: BackendConfig,

    /// Branding used when the backend cannot supply website settings.
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default = "default_flash_ttl_secs")]
    pub flash_ttl_secs: u64,
}

fn default_port() -> u16 {
    8080
}

fn default_flash_ttl_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_school_name")]
    pub school_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            school_name: default_school_name(),
            tagline: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }
}

fn default_school_name() -> String {
    "School Portal".to_string()
}

impl SiteConfig {
    pub fn fallback_settings(&self) -> WebsiteSettings {
        WebsiteSettings {
            school_name: self.school_name.clone(),
            tagline: self.tagline.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            ..WebsiteSettings::default()
        }
    }
}

/// Get config directory (PORTAL_CONFIG_DIR or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PORTAL_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/school-portal");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("school-portal");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/school-portal");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("school-portal");
        }
    }

    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("backend.base_url", default_base_url())?
        .set_default("backend.timeout_secs", default_timeout_secs() as i64)?
        .set_default("flash_ttl_secs", default_flash_ttl_secs() as i64)?
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // PORTAL_BACKEND__BASE_URL, PORTAL_SITE__SCHOOL_NAME, ...
        .add_source(
            ::config::Environment::with_prefix("PORTAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Explicit precedence: PORTAL_PORT > PORT > config file > default
    if let Ok(port) = std::env::var("PORTAL_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
