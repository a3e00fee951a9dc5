//! Startup configuration.
//! Layers, lowest first: built-in defaults, JSON stored under
//! [`STORAGE_KEY`] in localStorage, then `?mode=` / `?drop=` query overrides.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::util::{clog, cwarn};

pub const STORAGE_KEY: &str = "aq_config";

/// How the root composer treats animal moves and the save button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppMode {
    /// Moves are staged and committed by "Save Configuration"; timed login.
    DraftThenSave,
    /// Moves commit immediately; "Save" submits a transaction; wallet login.
    #[default]
    WalletCommit,
}

/// How a release point becomes a sprite's top-left position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropStrategy {
    /// Pointer position relative to the surface, centred on the sprite.
    AbsolutePointer,
    /// Pre-drag position plus the pointer displacement, rounded.
    #[default]
    RelativeDelta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: AppMode,
    pub drop_strategy: DropStrategy,
    pub sprite_base_size: f64,
    pub sprite_size_factor: f64,
    /// Base size of the detail modal's growth preview.
    pub preview_base_size: f64,
    pub scroll_step: f64,
    pub login_delay_ms: u32,
    pub notice_duration_ms: u32,
    pub chain: String,
    /// Per-call latency of the simulated wallet.
    pub wallet_latency_ms: u32,
    /// Probability in `[0, 1]` that a simulated wallet call fails.
    pub wallet_failure_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: AppMode::default(),
            drop_strategy: DropStrategy::default(),
            sprite_base_size: 60.0,
            sprite_size_factor: 0.15,
            preview_base_size: 80.0,
            scroll_step: 200.0,
            login_delay_ms: 1500,
            notice_duration_ms: 2000,
            chain: "sui:devnet".to_string(),
            wallet_latency_ms: 600,
            wallet_failure_rate: 0.0,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidValue { key: String, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "stored config is not valid JSON: {err}"),
            Self::InvalidValue { key, value } => {
                write!(f, "unsupported value `{value}` for `{key}`")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.wallet_failure_rate = config.wallet_failure_rate.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Apply `mode` and `drop` overrides from a URL query string (with or
    /// without the leading `?`). Unknown keys are ignored; every bad value is
    /// reported and skipped.
    pub fn apply_query(&mut self, query: &str) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='));
        for (key, value) in pairs {
            match (key, value) {
                ("mode", "draft") => self.mode = AppMode::DraftThenSave,
                ("mode", "wallet") => self.mode = AppMode::WalletCommit,
                ("drop", "absolute") => self.drop_strategy = DropStrategy::AbsolutePointer,
                ("drop", "relative") => self.drop_strategy = DropStrategy::RelativeDelta,
                ("mode" | "drop", _) => errors.push(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                }),
                _ => {}
            }
        }
        errors
    }

    /// Layer stored JSON and the query over the defaults. Errors never abort
    /// loading; the offending layer is skipped.
    pub fn layered(stored: Option<&str>, query: &str) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let mut config = match stored.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                errors.push(err);
                Self::default()
            }
            None => Self::default(),
        };
        errors.extend(config.apply_query(query));
        (config, errors)
    }

    /// Read the browser layers and log what was picked up.
    pub fn load() -> Self {
        let window = web_sys::window();
        let stored = window
            .as_ref()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
        let query = window
            .as_ref()
            .and_then(|win| win.location().search().ok())
            .unwrap_or_default();
        let (config, errors) = Self::layered(stored.as_deref(), &query);
        for err in &errors {
            cwarn(&format!("config: {err}"));
        }
        clog(&format!(
            "config: mode={:?} drop={:?} stored={}",
            config.mode,
            config.drop_strategy,
            stored.is_some()
        ));
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_garden() {
        let c = AppConfig::default();
        assert_eq!(c.mode, AppMode::WalletCommit);
        assert_eq!(c.drop_strategy, DropStrategy::RelativeDelta);
        assert_eq!(c.sprite_base_size, 60.0);
        assert_eq!(c.scroll_step, 200.0);
        assert_eq!(c.login_delay_ms, 1500);
        assert_eq!(c.chain, "sui:devnet");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let c = AppConfig::from_json(r#"{"mode":"draft_then_save","scroll_step":120}"#).unwrap();
        assert_eq!(c.mode, AppMode::DraftThenSave);
        assert_eq!(c.scroll_step, 120.0);
        assert_eq!(c.notice_duration_ms, 2000);
    }

    #[test]
    fn failure_rate_is_clamped() {
        let c = AppConfig::from_json(r#"{"wallet_failure_rate":3.5}"#).unwrap();
        assert_eq!(c.wallet_failure_rate, 1.0);
    }

    #[test]
    fn query_overrides_stored_layer() {
        let (c, errors) = AppConfig::layered(
            Some(r#"{"mode":"wallet_commit","drop_strategy":"relative_delta"}"#),
            "?mode=draft&drop=absolute&utm=x",
        );
        assert!(errors.is_empty());
        assert_eq!(c.mode, AppMode::DraftThenSave);
        assert_eq!(c.drop_strategy, DropStrategy::AbsolutePointer);
    }

    #[test]
    fn bad_layers_are_reported_and_skipped() {
        let (c, errors) = AppConfig::layered(Some("{not json"), "mode=sideways");
        assert_eq!(c, AppConfig::default());
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ConfigError::Parse(_)));
        assert_eq!(errors[1].to_string(), "unsupported value `sideways` for `mode`");
    }
}
