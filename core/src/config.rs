//! Client configuration, resolved once at startup.

/// Environment variable holding the API base path.
pub const API_BASE_ENV: &str = "NOTES_API_BASE";

/// Base path used when `NOTES_API_BASE` is unset or blank.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Prefix for every request path, e.g. `/api` or `http://host:3000/api`.
    pub api_base: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl NotesConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Read `NOTES_API_BASE` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration against an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup(API_BASE_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        tracing::debug!(api_base = %api_base, "resolved notes API base");
        Self { api_base }
    }
}
