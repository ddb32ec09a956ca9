/// Receives stage notifications while a run executes.
///
/// The library crates stay silent and only return values or typed errors;
/// anything user-visible during a run goes through this trait at the tool
/// boundary.
pub trait Progress {
    fn stage(&self, message: &str);
}

/// Prints each stage to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn stage(&self, message: &str) {
        println!("{message}");
    }
}

/// Discards all notifications.
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn stage(&self, _message: &str) {}
}
