use config::{Config, Environment, File};
use podium_domain::config::PodiumConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the config file looked up when no path is given (`podium.toml`, `podium.yaml`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "podium";

/// Prefix of environment overrides, e.g. `PODIUM__SCHEDULE__UTC_OFFSET_MINUTES=60`.
pub const ENV_PREFIX: &str = "PODIUM";

#[podium_derive::podium_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `PODIUM__*` environment variables.
///
/// Nested keys use a double underscore: `PODIUM__LOGGING__LEVEL` maps to `logging.level`.
/// An explicit `path` must exist; without one, a `podium.*` file in the working directory
/// is used when present and defaults apply otherwise.
///
/// # Errors
/// * The explicit file is missing or unreadable.
/// * The merged sources do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use podium_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ShellConfig {
///     verbose: bool,
/// }
///
/// let cfg: ShellConfig = load_config(Some("config/missing")).unwrap_or_default();
/// assert!(!cfg.verbose);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .convert_case(config::Case::Snake),
        );

    if required {
        info!("Loading config from {}", effective_path.display());
    } else {
        debug!("Loading optional config from {}", effective_path.display());
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the platform [`PodiumConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_podium_config(path: Option<impl AsRef<Path>>) -> Result<PodiumConfig, ConfigError> {
    load_config::<PodiumConfig>(path)
}
