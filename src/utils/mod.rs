//! Helpers shared by the whole app: panic and error hooks, key hints for the
//! help bar, key event formatting and log file setup.

#[cfg(not(tarpaulin_include))]
pub(crate) mod errors;
pub(crate) mod help_msg;
pub(crate) mod key_events;
#[cfg(not(tarpaulin_include))]
pub(crate) mod logging;
