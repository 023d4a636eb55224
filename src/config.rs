//! Configuration for the [`Converter`](crate::Converter).

use crate::lunar::ConversionMode;
use serde::{Deserialize, Serialize};

/// Settings for a [`Converter`](crate::Converter).
///
/// Deserializes from a partial document; missing fields take their
/// defaults.
///
/// ```
/// use lunar_tibetan::{ConversionMode, ConverterConfig};
///
/// let config = ConverterConfig::new().with_mode(ConversionMode::Approximate);
/// assert_eq!(config.mode(), ConversionMode::Approximate);
/// assert!(config.festivals());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Lunar conversion mode.
    mode: ConversionMode,
    /// Whether to look up festivals for each converted day.
    festivals: bool,
}

impl ConverterConfig {
    /// Defaults: exact lunar conversion, festival lookup on.
    pub const fn new() -> Self {
        Self {
            mode: ConversionMode::Exact,
            festivals: true,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ConversionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_festivals(mut self, festivals: bool) -> Self {
        self.festivals = festivals;
        self
    }

    pub const fn mode(&self) -> ConversionMode {
        self.mode
    }

    pub const fn festivals(&self) -> bool {
        self.festivals
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}
