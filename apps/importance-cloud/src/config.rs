use anyhow::{Context, Result};

use crate::cloud::style::CloudStyle;

pub const MIN_SIZE_VAR: &str = "IMPORTANCE_CLOUD_MIN_SIZE";
pub const MAX_SIZE_VAR: &str = "IMPORTANCE_CLOUD_MAX_SIZE";
pub const MIN_ALPHA_VAR: &str = "IMPORTANCE_CLOUD_MIN_ALPHA";
pub const MAX_ALPHA_VAR: &str = "IMPORTANCE_CLOUD_MAX_ALPHA";

impl CloudStyle {
    /// Cloud style loaded from environment variables, falling back to the
    /// built-in ranges for anything unset.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CloudStyle::default();
        let style = CloudStyle {
            min_size: optional_f64(&lookup, MIN_SIZE_VAR, defaults.min_size)?,
            max_size: optional_f64(&lookup, MAX_SIZE_VAR, defaults.max_size)?,
            min_alpha: optional_f64(&lookup, MIN_ALPHA_VAR, defaults.min_alpha)?,
            max_alpha: optional_f64(&lookup, MAX_ALPHA_VAR, defaults.max_alpha)?,
        };
        style
            .validate()
            .context("Cloud style from environment is invalid")?;
        tracing::debug!("Loaded cloud style: {style:?}");
        Ok(style)
    }
}

fn optional_f64<F>(lookup: &F, key: &str, default: f64) -> Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        None => Ok(default),
    }
}
