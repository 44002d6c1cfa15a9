//! Environment configuration.

use std::env;

use crate::core::terminal_image::ImageProtocol;

pub const TERM_VAR: &str = "TERM";
pub const IMAGE_PROTOCOL_VAR: &str = "COMIC_TERM_IMAGE_PROTOCOL";
pub const BASE_URL_VAR: &str = "COMIC_TERM_BASE_URL";
pub const LOG_VAR: &str = "COMIC_TERM_LOG";

#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Terminal identity as declared by the emulator.
    pub term: Option<String>,
    /// Explicit protocol choice; wins over `term` when set to a known name.
    pub image_protocol: Option<ImageProtocol>,
    pub base_url: Option<String>,
    pub log_filter: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            term: env_string_opt(TERM_VAR),
            image_protocol: env_string_opt(IMAGE_PROTOCOL_VAR)
                .and_then(|value| ImageProtocol::from_name(&value)),
            base_url: env_string_opt(BASE_URL_VAR),
            log_filter: env_string_opt(LOG_VAR),
        }
    }

    /// Render protocol, resolved once and passed down as a value.
    pub fn resolve_protocol(&self) -> ImageProtocol {
        self.image_protocol
            .unwrap_or_else(|| ImageProtocol::from_term(self.term.as_deref().unwrap_or_default()))
    }
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{EnvConfig, BASE_URL_VAR, IMAGE_PROTOCOL_VAR, LOG_VAR, TERM_VAR};
    use crate::core::terminal_image::ImageProtocol;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env lock poisoned")
    }

    fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }

    #[test]
    fn unset_environment_falls_back_to_iterm2() {
        let _lock = env_lock();
        let _g1 = set_env_guard(TERM_VAR, None);
        let _g2 = set_env_guard(IMAGE_PROTOCOL_VAR, None);
        let _g3 = set_env_guard(BASE_URL_VAR, None);
        let _g4 = set_env_guard(LOG_VAR, None);

        let config = EnvConfig::from_env();
        assert!(config.term.is_none());
        assert!(config.image_protocol.is_none());
        assert!(config.base_url.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.resolve_protocol(), ImageProtocol::Iterm2);
    }

    #[test]
    fn kitty_term_selects_kitty() {
        let _lock = env_lock();
        let _g1 = set_env_guard(TERM_VAR, Some("xterm-kitty"));
        let _g2 = set_env_guard(IMAGE_PROTOCOL_VAR, None);

        assert_eq!(EnvConfig::from_env().resolve_protocol(), ImageProtocol::Kitty);
    }

    #[test]
    fn protocol_override_wins_over_term() {
        let _lock = env_lock();
        let _g1 = set_env_guard(TERM_VAR, Some("xterm-kitty"));
        let _g2 = set_env_guard(IMAGE_PROTOCOL_VAR, Some("iterm2"));

        assert_eq!(EnvConfig::from_env().resolve_protocol(), ImageProtocol::Iterm2);
    }

    #[test]
    fn unknown_override_and_blank_values_are_ignored() {
        let _lock = env_lock();
        let _g1 = set_env_guard(TERM_VAR, Some("xterm-kitty"));
        let _g2 = set_env_guard(IMAGE_PROTOCOL_VAR, Some("sixel"));
        let _g3 = set_env_guard(BASE_URL_VAR, Some("  "));
        let _g4 = set_env_guard(LOG_VAR, Some("debug"));

        let config = EnvConfig::from_env();
        assert!(config.image_protocol.is_none());
        assert!(config.base_url.is_none());
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
        assert_eq!(config.resolve_protocol(), ImageProtocol::Kitty);
    }
}
