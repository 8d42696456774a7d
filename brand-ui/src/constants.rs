// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::types::LogoSize;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

pub const LOGO_SRC: &str = "/assets/logo.png";
pub const LOGO_ALT: &str = "Logo";

pub const DEFAULT_TOAST_DURATION_MS: u32 = 5000;

/// Runtime settings injected by the hosting page as `window.__APP_CONFIG`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "logLevel")]
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(rename = "toastDurationMs")]
    #[serde(default)]
    pub toast_duration_ms: Option<u32>,
    #[serde(rename = "logoSize")]
    #[serde(default)]
    pub logo_size: Option<String>,
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "no global window".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

impl RuntimeConfig {
    /// Load `window.__APP_CONFIG`, falling back to defaults when it is absent
    /// or malformed.
    pub fn load_or_default() -> Self {
        app_config().unwrap_or_else(|e| {
            log::warn!("{e}; using default configuration");
            Self::default()
        })
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Info)
    }

    pub fn toast_duration_ms(&self) -> u32 {
        self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS)
    }

    pub fn logo_size(&self) -> LogoSize {
        match self.logo_size.as_deref().map(str::parse::<LogoSize>) {
            Some(Ok(size)) => size,
            Some(Err(e)) => {
                log::warn!("{e}; using {}", LogoSize::default());
                LogoSize::default()
            }
            None => LogoSize::default(),
        }
    }
}
