use serde::{Deserialize, Serialize};

/// Root configuration from oneof.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OneofConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputSection,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSection,
}

/// [output] section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Pretty-print re-encoded JSON
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// [logging] section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// tracing EnvFilter directive, overridden by RUST_LOG
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

pub(crate) fn default_filter() -> String {
    "info".to_string()
}
