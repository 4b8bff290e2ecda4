//! Settings resolution: defaults, then an optional `checkpoint.toml` in the
//! working directory, then environment variables. CLI flags are applied on
//! top by `main`.

use std::fs;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint_url: String,
    pub checkpoint_id: i64,
    pub poll_seconds: u64,
    pub mock: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: "http://127.0.0.1:8700/attendance".into(),
            checkpoint_id: 1,
            poll_seconds: 10,
            mock: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint_url: Option<String>,
    checkpoint_id: Option<i64>,
    poll_seconds: Option<u64>,
    mock: Option<bool>,
}

pub fn load_settings() -> Settings {
    let file_contents = fs::read_to_string("checkpoint.toml").ok();
    resolve_settings(file_contents.as_deref(), |key| std::env::var(key).ok())
}

fn resolve_settings(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.endpoint_url {
                    settings.endpoint_url = v;
                }
                if let Some(v) = file_cfg.checkpoint_id {
                    settings.checkpoint_id = v;
                }
                if let Some(v) = file_cfg.poll_seconds {
                    settings.poll_seconds = v;
                }
                if let Some(v) = file_cfg.mock {
                    settings.mock = v;
                }
            }
            Err(err) => {
                tracing::warn!("ignoring unreadable checkpoint.toml: {err}");
            }
        }
    }

    if let Some(v) = env("CHECKPOINT_ENDPOINT") {
        settings.endpoint_url = v;
    }
    if let Some(v) = env("CHECKPOINT_ID") {
        if let Ok(parsed) = v.parse::<i64>() {
            settings.checkpoint_id = parsed;
        }
    }
    if let Some(v) = env("CHECKPOINT_POLL_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.poll_seconds = parsed;
        }
    }
    if let Some(v) = env("CHECKPOINT_MOCK") {
        settings.mock = matches!(v.as_str(), "1" | "true" | "yes");
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_env() {
        let settings = resolve_settings(None, |_| None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let raw = "endpoint_url = \"http://gate.example/attendance\"\ncheckpoint_id = 3\n";
        let settings = resolve_settings(Some(raw), |_| None);
        assert_eq!(settings.endpoint_url, "http://gate.example/attendance");
        assert_eq!(settings.checkpoint_id, 3);
        assert_eq!(settings.poll_seconds, 10);
    }

    #[test]
    fn env_overrides_file() {
        let raw = "endpoint_url = \"http://gate.example/attendance\"\npoll_seconds = 30\n";
        let settings = resolve_settings(Some(raw), |key| match key {
            "CHECKPOINT_ENDPOINT" => Some("http://env.example/attendance".to_string()),
            "CHECKPOINT_MOCK" => Some("true".to_string()),
            _ => None,
        });
        assert_eq!(settings.endpoint_url, "http://env.example/attendance");
        assert_eq!(settings.poll_seconds, 30);
        assert!(settings.mock);
    }

    #[test]
    fn unparseable_numeric_env_values_are_ignored() {
        let settings = resolve_settings(None, |key| match key {
            "CHECKPOINT_ID" => Some("gate-one".to_string()),
            "CHECKPOINT_POLL_SECONDS" => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(settings.checkpoint_id, 1);
        assert_eq!(settings.poll_seconds, 10);
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let settings = resolve_settings(Some("endpoint_url = ["), |_| None);
        assert_eq!(settings, Settings::default());
    }
}
