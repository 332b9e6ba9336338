mod settings;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{HubSettings, ServerSettings, Settings};

/// Environment variables are read as `POPHUB__<SECTION>__<KEY>`,
/// e.g. `POPHUB__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "POPHUB";

/// Loads the configuration from `config/default.*` (if present) and the environment.
/// Anything neither source sets falls back to `Settings::default()`.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from("config/default")
}

/// Same as [`load_config`] but reads the file source from `path`
/// (extension optional, as with `config::File::with_name`).
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(partial.merge(Settings::default()))
}
