use std::{
    fs::File,
    path::{Path, PathBuf},
};

use color_eyre::{Result, eyre::Context};
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::PROJECT_NAME;

lazy_static! {
    pub static ref LOG_ENV: String = format!("{}_LOG_LEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Create `data_dir` if needed and truncate the log file inside it.
fn open_log_file(data_dir: &Path) -> Result<(PathBuf, File)> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Cannot create data directory {}", data_dir.display()))?;
    let path = data_dir.join(LOG_FILE.as_str());
    let file = File::create(&path)
        .with_context(|| format!("Cannot create log file {}", path.display()))?;
    Ok((path, file))
}

/// Log to `<data_dir>/input_submit.log`; the terminal belongs to the UI.
///
/// The level comes from `RUST_LOG`, then `INPUT_SUBMIT_LOG_LEVEL`, default `info`.
/// Returns the path of the log file.
pub fn init(data_dir: &Path) -> Result<PathBuf> {
    let (path, log_file) = open_log_file(data_dir)?;

    let env_filter = EnvFilter::builder().with_default_directive(tracing::Level::INFO.into());
    let env_filter = env_filter
        .try_from_env()
        .or_else(|_| env_filter.with_env_var(LOG_ENV.clone()).from_env())?;

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir_in;

    use super::*;

    #[test]
    fn log_file_lands_in_data_dir() {
        let temp = tempdir_in(".").unwrap();
        let data_dir = temp.path().join("nested").join("data");

        let (path, _file) = open_log_file(&data_dir).unwrap();
        assert_eq!(path, data_dir.join("input_submit.log"));
        assert!(path.is_file());
    }
}
