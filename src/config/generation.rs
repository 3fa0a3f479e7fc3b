//! Generation settings

use serde::{Deserialize, Serialize};

/// Generation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Abort on the first example that fails instead of recording it
    #[serde(default)]
    pub fail_fast: bool,
}
