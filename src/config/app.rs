//! Application presentation options.

use serde::Deserialize;

/// Title override and debug flag.
#[derive(Debug, Clone, Deserialize)]
pub struct AppOptions {
    /// Application title shown by the front end and in report headers.
    #[serde(default = "default_title")]
    pub title: String,

    /// Debug mode: verbose error details in API responses.
    #[serde(default)]
    pub debug: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            debug: false,
        }
    }
}

fn default_title() -> String {
    "Car Advisor".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = AppOptions::default();
        assert_eq!(options.title, "Car Advisor");
        assert!(!options.debug);
    }
}
