//! Process-wide strict validation switch
//!
//! Strict mode is **off by default**. When it is on,
//! [`TypographyContext::new`](crate::context::TypographyContext::new) refuses
//! configs with validation errors instead of computing through them.
//!
//! ```
//! use typescale_core::strict_mode;
//!
//! strict_mode::set_strict_mode(true);
//! assert!(strict_mode::is_strict_mode());
//! strict_mode::set_strict_mode(false);
//! ```
//!
//! Set `TYPESCALE_STRICT=1` to turn it on at startup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

pub const STRICT_ENV_VAR: &str = "TYPESCALE_STRICT";

static STRICT: AtomicBool = AtomicBool::new(false);

static ENV_CHECKED: OnceLock<()> = OnceLock::new();

fn check_env() {
    ENV_CHECKED.get_or_init(|| {
        if let Ok(val) = std::env::var(STRICT_ENV_VAR) {
            if matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on") {
                STRICT.store(true, Ordering::SeqCst);
                log::info!("Strict validation enabled via {STRICT_ENV_VAR}");
            }
        }
    });
}

/// Whether configs must validate cleanly before use
///
/// Reads `TYPESCALE_STRICT` on first call; runtime changes win afterwards.
pub fn is_strict_mode() -> bool {
    check_env();
    STRICT.load(Ordering::SeqCst)
}

/// Override the environment setting at runtime
pub fn set_strict_mode(enabled: bool) {
    check_env();
    STRICT.store(enabled, Ordering::SeqCst);
    log::debug!(
        "Strict validation {} via runtime call",
        if enabled { "enabled" } else { "disabled" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        set_strict_mode(true);
        assert!(is_strict_mode());

        set_strict_mode(false);
        assert!(!is_strict_mode());
    }
}
