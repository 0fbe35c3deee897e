use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;
pub use models::*;


/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "MEETCOST";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Loads the application configuration.
///
/// Sources are layered in this order, later ones winning:
/// `config/default.*`, `config/{RUN_ENV}.*` and `MEETCOST__SECTION__KEY`
/// environment variables. `CONFIG_DIR` relocates the directory and `PREFIX`
/// renames the environment prefix. Every file is optional.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let config: AppConfig = config_builder(&config_dir, &run_env, &prefix)
        .build()?
        .try_deserialize()?;
    debug!(
        "Loaded config from {} (RUN_ENV={}): {:?}",
        config_dir.display(),
        run_env,
        config
    );
    Ok(config)
}

/// Builds the layered source list without reading the process dotenv file.
pub fn config_builder(
    config_dir: &Path,
    run_env: &str,
    prefix: &str,
) -> ConfigBuilder<DefaultState> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(prefix)
                .separator(CONFIG_SEPARATOR)
                .try_parsing(true),
        )
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "stats.hourly_rate")
///
/// # Returns
///
/// The environment variable name (e.g., "MEETCOST__STATS__HOURLY_RATE")
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// `DOTENV_OVERRIDE` selects another file; the default is `.env`. A missing
/// file is not an error. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
