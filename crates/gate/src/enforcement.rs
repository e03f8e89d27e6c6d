use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide permission enforcement toggle.
///
/// Read fresh on every decision, never cached: flipping it at runtime
/// changes the very next decision. When disabled, every actor is treated as
/// an administrator. Shared between the host and the gate via `Arc`.
#[derive(Debug)]
pub struct EnforcementConfig {
    enabled: AtomicBool,
}

impl EnforcementConfig {
    pub fn enabled() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: AtomicBool::new(false),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Default for EnforcementConfig {
    fn default() -> Self {
        Self::enabled()
    }
}
