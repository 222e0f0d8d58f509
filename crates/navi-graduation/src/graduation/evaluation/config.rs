use serde::{Deserialize, Serialize};

use super::policy::{GpaCeiling, InputBounds};

/// Policy dials for input guarding; the completion rules themselves are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub input_bounds: InputBounds,
    pub gpa_ceiling: GpaCeiling,
}
