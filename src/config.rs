//! Build-time configuration.
//!
//! Everything here is baked in when the wasm bundle is compiled, e.g.
//! `GERMINAH_SUPABASE_URL=https://xyz.supabase.co trunk build --release`.

/// Cached `{id, name, email}` of the signed-in user.
pub const USER_KEY: &str = "germinah_user";
/// Serialized irrigation/notification/system settings.
pub const SETTINGS_KEY: &str = "germinah_settings";
/// Legacy presence-only auth flag from before provider sessions existed.
pub const LEGACY_TOKEN_KEY: &str = "germinah_token";
/// Provider session (access + refresh token).
pub const SESSION_KEY: &str = "germinah_session";

pub const DEFAULT_LOG_FILTER: &str = "germinah=info";

// Simulated network latency, in milliseconds.
pub const SETTINGS_SAVE_DELAY_MS: u32 = 1500;
pub const PASSWORD_CHANGE_DELAY_MS: u32 = 1500;
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 2000;
pub const IRRIGATION_RUN_MS: u32 = 3000;
pub const BANNER_VISIBLE_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub supabase: Option<SupabaseConfig>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("GERMINAH_SUPABASE_URL"),
            option_env!("GERMINAH_SUPABASE_ANON_KEY"),
            option_env!("GERMINAH_LOG"),
        )
    }

    fn from_values(url: Option<&str>, anon_key: Option<&str>, log: Option<&str>) -> Self {
        let supabase = match (non_empty(url), non_empty(anon_key)) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig {
                url: url.trim_end_matches('/').to_string(),
                anon_key: anon_key.to_string(),
            }),
            _ => None,
        };

        Self {
            supabase,
            log_filter: non_empty(log).unwrap_or(DEFAULT_LOG_FILTER).to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_supabase_values_disable_auth() {
        let cfg = AppConfig::from_values(Some("https://x.supabase.co"), None, None);
        assert!(cfg.supabase.is_none());

        let cfg = AppConfig::from_values(Some("  "), Some("key"), None);
        assert!(cfg.supabase.is_none());
    }

    #[test]
    fn test_supabase_url_is_normalized() {
        let cfg = AppConfig::from_values(Some("https://x.supabase.co/"), Some("anon"), None);
        let sb = cfg.supabase.unwrap();
        assert_eq!(sb.url, "https://x.supabase.co");
        assert_eq!(sb.anon_key, "anon");
    }

    #[test]
    fn test_log_filter_defaults() {
        assert_eq!(AppConfig::from_values(None, None, None).log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(
            AppConfig::from_values(None, None, Some("germinah=debug")).log_filter,
            "germinah=debug"
        );
    }
}
