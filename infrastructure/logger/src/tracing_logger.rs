use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`. Each instance tags its events with the
/// collection it serves, e.g. `products` or `carts`.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shop", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shop", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shop", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shop", component = self.component, "{}", message);
    }
}
