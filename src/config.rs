use std::{env, path::PathBuf};

use color_eyre::{Result, eyre::Context};
use config::{Environment, File, FileFormat};
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::component::{
    event::DEFAULT_EVENT_NAME, pattern::DEFAULT_PATTERN, style::StyleHooksConfig,
};

/// Configuration surface of the input widget
///
/// Every field can be set from the config file, the environment or the CLI.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputSubmitConfig {
    /// Initial text, validated like typed text
    pub value: String,
    pub disabled: bool,
    pub placeholder: String,
    pub auto_focus: bool,
    pub button_label: String,
    /// Regular expression the text must match for the button to be enabled
    pub pattern: String,
    /// Name of the event dispatched on submit
    pub event_name: String,
}

impl Default for InputSubmitConfig {
    fn default() -> Self {
        Self {
            value: String::new(),
            disabled: false,
            placeholder: "Type something...".into(),
            auto_focus: false,
            button_label: "Submit".into(),
            pattern: DEFAULT_PATTERN.into(),
            event_name: DEFAULT_EVENT_NAME.into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Directory holding the log file
    pub data_dir: PathBuf,
    #[serde(default)]
    pub input: InputSubmitConfig,
    #[serde(default)]
    pub styles: StyleHooksConfig,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
}

const CONFIG_FILE: &str = "config.json5";

impl Config {
    /// Load the config, lowest priority first: defaults, `config.json5` in the
    /// config directory, `INPUT_SUBMIT_*` environment variables, CLI arguments.
    pub fn new(cli_source: Option<crate::cli::ClapSource>) -> Result<Self> {
        let data_dir = get_data_dir();
        let config_dir = cli_source
            .as_ref()
            .and_then(|cli| cli.config_dir.clone())
            .map(PathBuf::from)
            .unwrap_or_else(get_config_dir);

        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().to_string())?
            .add_source(
                File::from(config_dir.join(CONFIG_FILE))
                    .format(FileFormat::Json5)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(&PROJECT_NAME)
                    .prefix_separator("_")
                    .separator("__"),
            );

        // Add CLI source last (highest priority)
        if let Some(cli_source) = cli_source {
            builder = builder.add_source(cli_source);
        }

        let cfg: Self = builder
            .build()
            .context("Error building config")?
            .try_deserialize()
            .context("Error deserialize config")?;

        Ok(cfg)
    }
}

fn dir_from_env(suffix: &str) -> Option<PathBuf> {
    env::var(format!("{}_{}", PROJECT_NAME.clone(), suffix))
        .ok()
        .map(PathBuf::from)
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = dir_from_env("DATA") {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = dir_from_env("CONFIG") {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "yyang", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::tempdir_in;

    use crate::cli::{ClapSource, Cli};

    use super::*;

    fn config_dir_var() -> String {
        format!("{}_CONFIG", PROJECT_NAME.clone())
    }

    /// Load the config with an empty config dir, so no user config file leaks in
    fn load_isolated(args: &[&str]) -> Config {
        let temp_config = tempdir_in(".").unwrap();
        temp_env::with_vars(
            [(
                config_dir_var().as_str(),
                Some(temp_config.path().to_str().unwrap()),
            )],
            || {
                let args = Cli::parse_from(args);
                Config::new(Some(ClapSource::new(&args))).expect("Failed to load config")
            },
        )
    }

    #[test]
    fn defaults() {
        let config = load_isolated(&["test-config"]);
        assert_eq!(config.input, InputSubmitConfig::default());
        assert_eq!(config.input.pattern, r"^\w");
        assert_eq!(config.input.event_name, "default-input-submit-event");
        assert_eq!(config.styles, StyleHooksConfig::default());
    }

    #[test]
    fn data_dir_from_env() {
        let temp_data = tempdir_in(".").unwrap();

        temp_env::with_vars(
            [(
                format!("{}_DATA", PROJECT_NAME.clone()).as_str(),
                Some(temp_data.path().to_str().unwrap()),
            )],
            || {
                let config = Config::new(None).unwrap();
                assert_eq!(config.data_dir, temp_data.path());
            },
        );
    }

    #[test]
    fn data_dir_from_cli() {
        let config = load_isolated(&["test-config", "--data-dir", ".cli-data"]);
        assert_eq!(config.data_dir, PathBuf::from(".cli-data"));
    }

    #[test]
    fn input_from_cli() {
        let config = load_isolated(&[
            "test-config",
            "--pattern",
            "^[0-9]+$",
            "--event-name",
            "search-submit",
            "--placeholder",
            "Digits",
            "--button-label",
            "Go",
            "--value",
            "42",
            "--auto-focus",
            "--disabled",
        ]);

        assert_eq!(
            config.input,
            InputSubmitConfig {
                value: "42".into(),
                disabled: true,
                placeholder: "Digits".into(),
                auto_focus: true,
                button_label: "Go".into(),
                pattern: "^[0-9]+$".into(),
                event_name: "search-submit".into(),
            }
        );
    }

    #[test]
    fn input_from_env() {
        let temp_config = tempdir_in(".").unwrap();
        temp_env::with_vars(
            [
                (
                    config_dir_var().as_str(),
                    Some(temp_config.path().to_str().unwrap()),
                ),
                ("INPUT_SUBMIT_INPUT__EVENT_NAME", Some("env-submit")),
            ],
            || {
                let config = Config::new(None).unwrap();
                assert_eq!(config.input.event_name, "env-submit");
            },
        );
    }

    #[test]
    fn config_file_then_cli() {
        let temp_config = tempdir_in(".").unwrap();
        std::fs::write(
            temp_config.path().join(CONFIG_FILE),
            r#"{
                // json5 allows comments
                input: { placeholder: "From file", event_name: "file-submit" },
                styles: { button: { fg: "white", bg: "blue" } },
            }"#,
        )
        .unwrap();

        let args = Cli::parse_from([
            "test-config",
            "--config-dir",
            temp_config.path().to_str().unwrap(),
            "--event-name",
            "cli-submit",
        ]);
        let config = Config::new(Some(ClapSource::new(&args))).unwrap();

        assert_eq!(config.input.placeholder, "From file");
        assert_eq!(config.input.event_name, "cli-submit");
        assert_eq!(config.styles.button.fg.as_deref(), Some("white"));
        assert_eq!(config.styles.button.bg.as_deref(), Some("blue"));
        assert!(config.styles.button.modifiers.is_empty());
        // hooks missing from the file keep their defaults
        assert_eq!(
            config.styles.button_hover,
            StyleHooksConfig::default().button_hover
        );
    }
}
