//! Runtime settings read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::CardioError;

/// Default wait before a simulated upload completes.
pub const DEFAULT_UPLOAD_DELAY: Duration = Duration::from_millis(2000);

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// File when stdout is a terminal, stdout otherwise
    Auto,
    File,
    Stdout,
}

impl std::str::FromStr for LogMode {
    type Err = CardioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "file" => Ok(Self::File),
            "stdout" => Ok(Self::Stdout),
            other => Err(CardioError::Config(format!(
                "CARDIO_LOG_MODE must be auto, file or stdout (got '{other}')"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    pub upload_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Auto,
            log_file: PathBuf::from("cardio-analytics.log"),
            upload_delay: DEFAULT_UPLOAD_DELAY,
        }
    }
}

impl Settings {
    /// Load settings from `CARDIO_*` environment variables.
    ///
    /// # Errors
    /// Returns `CardioError::Config` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, CardioError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable variable source.
    ///
    /// # Errors
    /// Returns `CardioError::Config` if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CardioError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(mode) = lookup("CARDIO_LOG_MODE") {
            settings.log_mode = mode.parse()?;
        }

        if let Some(path) = lookup("CARDIO_LOG_FILE").filter(|p| !p.trim().is_empty()) {
            settings.log_file = PathBuf::from(path);
        }

        if let Some(ms) = lookup("CARDIO_UPLOAD_DELAY_MS") {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                CardioError::Config(format!(
                    "CARDIO_UPLOAD_DELAY_MS must be a whole number of milliseconds (got '{ms}')"
                ))
            })?;
            settings.upload_delay = Duration::from_millis(ms);
        }

        Ok(settings)
    }

    /// Resolve `Auto` against whether stdout is interactive.
    #[must_use]
    pub fn log_to_file(&self, interactive: bool) -> bool {
        match self.log_mode {
            LogMode::File => true,
            LogMode::Stdout => false,
            LogMode::Auto => interactive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).expect("Should load");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.upload_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("CARDIO_LOG_MODE", "stdout"),
            ("CARDIO_LOG_FILE", "/tmp/cardio.log"),
            ("CARDIO_UPLOAD_DELAY_MS", "250"),
        ]))
        .expect("Should load");

        assert_eq!(settings.log_mode, LogMode::Stdout);
        assert_eq!(settings.log_file, PathBuf::from("/tmp/cardio.log"));
        assert_eq!(settings.upload_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_values() {
        assert!(Settings::from_lookup(lookup(&[("CARDIO_LOG_MODE", "syslog")])).is_err());
        assert!(Settings::from_lookup(lookup(&[("CARDIO_UPLOAD_DELAY_MS", "soon")])).is_err());
    }

    #[test]
    fn test_log_mode_resolution() {
        let mut settings = Settings::default();
        assert!(settings.log_to_file(true));
        assert!(!settings.log_to_file(false));

        settings.log_mode = LogMode::Stdout;
        assert!(!settings.log_to_file(true));
    }
}
