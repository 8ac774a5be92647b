use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

pub const ENV_API_BASE: &str = "LINKER_API_BASE";
pub const ENV_DEBOUNCE_MS: &str = "LINKER_SEARCH_DEBOUNCE_MS";
pub const ENV_PAGE_SIZE: &str = "LINKER_SEARCH_PAGE_SIZE";

/// Parse `config.toml` contents. Missing sections and fields take defaults.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::config(format!("{CONFIG_PATH}: {e}")))
}

/// Overlay `LINKER_*` variables onto `config`. Values that do not parse are
/// logged and ignored.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
        config.api.base_url = base.trim().to_string();
    }
    if let Some(raw) = lookup(ENV_DEBOUNCE_MS) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.search.debounce_ms = ms,
            Err(e) => tracing::warn!(var = ENV_DEBOUNCE_MS, value = %raw, error = %e, "ignoring invalid override"),
        }
    }
    if let Some(raw) = lookup(ENV_PAGE_SIZE) {
        match raw.trim().parse::<u32>() {
            Ok(size) if size > 0 => config.search.page_size = size,
            _ => tracing::warn!(var = ENV_PAGE_SIZE, value = %raw, "ignoring invalid override"),
        }
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn load() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|error| {
            tracing::warn!(%error, "falling back to default config");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!("{CONFIG_PATH} not found ({e}), using defaults");
            AppConfig::default()
        }
    };
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

// No filesystem or process environment in the browser.
#[cfg(target_arch = "wasm32")]
fn load() -> AppConfig {
    AppConfig::default()
}

/// Load the config once. Safe to call repeatedly; only the first call reads.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = load();
        tracing::info!(
            api = %config.api.base_url,
            debounce_ms = config.search.debounce_ms,
            page_size = config.search.page_size,
            "config loaded"
        );
        config
    })
}

/// The loaded config, or defaults if [`load_config`] has not run.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}
