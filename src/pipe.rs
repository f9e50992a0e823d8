//! Headless mode: drive an [`InputSubmit`] from lines of text.

use std::io::{BufRead, Write};

use color_eyre::{Result, eyre::Context};
use crossterm::event::KeyCode;
use tracing::debug;

use crate::{actions::Action, component::input_submit::InputSubmit, config::InputSubmitConfig};

/// Type each line into the input and press Enter, writing every dispatched
/// event to `writer` as one JSON line. Returns the number of events written.
pub fn run<R: BufRead, W: Write>(cfg: &InputSubmitConfig, reader: R, mut writer: W) -> Result<usize> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut input = InputSubmit::from_config(0, tx.into(), cfg)?;
    let mut written = 0;

    for line in reader.lines() {
        let line = line.context("Error when reading input")?;
        input.set_value(line.as_str());
        input.on_key_press(&KeyCode::Enter.into());

        let mut emitted = false;
        while let Ok(action) = rx.try_recv() {
            if let Action::Dispatch(event) = action {
                writeln!(writer, "{}", serde_json::to_string(&event)?)?;
                emitted = true;
                written += 1;
            }
        }
        if !emitted {
            debug!("Line rejected by pattern `{}`", input.state().pattern.as_str());
        }
    }
    writer.flush()?;
    Ok(written)
}
