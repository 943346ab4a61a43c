use log::{error, info, warn};

/// Toast seam. The web shell renders these as notifications; the CLI and
/// tests substitute their own sinks.
pub trait Notify: Send + Sync {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink: forwards every toast to the log.
pub struct LogNotify;

impl Notify for LogNotify {
    fn success(&self, message: &str) {
        info!("{message}");
    }

    fn warning(&self, message: &str) {
        warn!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}
