///
/// Console settings, read from the `[io]` table of the runtime config.
///

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Digits printed after the decimal point for `f` items
    pub float_precision: usize,
    /// Append ` (expecting <type>): ` to input prompts
    pub type_hints: bool,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            float_precision: 6,
            type_hints: true,
        }
    }
}
