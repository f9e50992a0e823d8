use clap::{Parser, Subcommand};
use color_eyre::Result;
use config::{Map, Source, Value, ValueKind};

use crate::config::{get_config_dir, get_data_dir};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 60.0)]
    pub frame_rate: f64,

    /// Path to the data directory (logs)
    #[arg(short, long, value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Path to the directory holding `config.json5`
    #[arg(short, long, value_name = "PATH")]
    pub config_dir: Option<String>,

    /// Regular expression the input must match
    #[arg(short, long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Name of the event dispatched on submit
    #[arg(short, long, value_name = "NAME")]
    pub event_name: Option<String>,

    /// Hint shown while the input is empty
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Text of the submit button
    #[arg(long, value_name = "TEXT")]
    pub button_label: Option<String>,

    /// Initial input text
    #[arg(long, value_name = "TEXT")]
    pub value: Option<String>,

    /// Focus the input on start
    #[arg(long)]
    pub auto_focus: bool,

    /// Make the input and the button inert
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit each line of stdin and print the emitted events as JSON lines
    Pipe,
}

const VERSION_MESSAGE: &str = concat!(env!("CARGO_PKG_VERSION"));

pub fn version() -> String {
    let author = clap::crate_authors!();

    let data_dir_path = get_data_dir().display().to_string();
    let config_dir_path = get_config_dir().display().to_string();

    format!(
        "\
{VERSION_MESSAGE}

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}

/// CLI arguments as a [`config::Source`], the highest priority layer
#[derive(Debug, Clone, Default)]
pub(crate) struct ClapSource {
    pub data_dir: Option<String>,
    pub config_dir: Option<String>,
    pub pattern: Option<String>,
    pub event_name: Option<String>,
    pub placeholder: Option<String>,
    pub button_label: Option<String>,
    pub value: Option<String>,
    pub auto_focus: bool,
    pub disabled: bool,
}

impl ClapSource {
    pub fn new(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            config_dir: cli.config_dir.clone(),
            pattern: cli.pattern.clone(),
            event_name: cli.event_name.clone(),
            placeholder: cli.placeholder.clone(),
            button_label: cli.button_label.clone(),
            value: cli.value.clone(),
            auto_focus: cli.auto_focus,
            disabled: cli.disabled,
        }
    }
}

impl Source for ClapSource {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        let mut map = Map::new();
        if let Some(data_dir) = &self.data_dir {
            map.insert("data_dir".to_string(), Value::new(None, data_dir.clone()));
        }

        let mut input = Map::new();
        let strings = [
            ("pattern", &self.pattern),
            ("event_name", &self.event_name),
            ("placeholder", &self.placeholder),
            ("button_label", &self.button_label),
            ("value", &self.value),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                input.insert(key.to_string(), Value::new(None, value.clone()));
            }
        }
        // flags only override when given
        if self.auto_focus {
            input.insert("auto_focus".to_string(), Value::new(None, true));
        }
        if self.disabled {
            input.insert("disabled".to_string(), Value::new(None, true));
        }
        if !input.is_empty() {
            map.insert(
                "input".to_string(),
                Value::new(None, ValueKind::Table(input)),
            );
        }
        Ok(map)
    }
}
