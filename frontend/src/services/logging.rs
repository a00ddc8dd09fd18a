use gloo::console;

/// Console logger that prefixes every line with the emitting component
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::line(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}
