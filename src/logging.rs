//! Browser console logging.
//!
//! Routes the `log` facade to the devtools console and installs the panic
//! hook so a panic shows up there with its message instead of as an opaque
//! `unreachable` trap.

/// Initialize the console logger at `level` and the panic hook.
///
/// Safe to call more than once: the first call installs the logger, later
/// calls only adjust the maximum level.
pub fn init(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
        log::debug!("console logger already initialized, level now {level}");
    }
}
