//! Error reporting and panic handling.
//!
//! A panic restores the terminal before anything is printed. Release builds
//! show a `human-panic` report; debug builds a full `better-panic` trace.
//! Either way the report also goes to the log file.

use std::{panic::PanicHookInfo, path::Path};

use color_eyre::{Result, config::PanicHook};
use tracing::error;

/// Install the eyre and panic hooks. Panic reports point at `log_file`.
pub fn init(log_file: &Path) -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(format!(
            "The input widget crashed. Details were written to {}",
            log_file.display()
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = crate::tui::restore() {
            error!("Unable to restore the terminal after a panic: {:?}", e);
        }
        report(&panic_hook, panic_info);
        std::process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

fn report(panic_hook: &PanicHook, panic_info: &PanicHookInfo<'_>) {
    let report = panic_hook.panic_report(panic_info).to_string();
    error!("Panic: {}", strip_ansi_escapes::strip_str(&report));

    #[cfg(not(debug_assertions))]
    {
        use human_panic::{handle_dump, metadata, print_msg};
        let metadata = metadata!();
        let dump = handle_dump(&metadata, panic_info);
        if print_msg(dump, &metadata).is_err() {
            eprintln!("human-panic could not print its report");
        }
        eprintln!("{report}");
    }

    #[cfg(debug_assertions)]
    {
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .create_panic_handler()(panic_info);
    }
}
