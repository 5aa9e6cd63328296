use std::sync::Arc;

pub use f2h_lib::ProgressCallback;

/// Stderr progress reporter, present only in verbose mode.
pub fn stderr_progress(verbose: bool) -> Option<ProgressCallback> {
    verbose.then(|| Arc::new(|msg: &str| eprintln!("{msg}")) as ProgressCallback)
}
