use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Z positions used while drilling.
///
/// Neither value is validated: a positive depth or a height below the
/// depth is written out exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToolConfig {
    /// Safe Z the tool retracts to between holes
    pub height: Decimal,
    /// Z the tool plunges to for each hole
    pub depth: Decimal,
}

impl ToolConfig {
    pub fn new(height: Decimal, depth: Decimal) -> Self {
        Self { height, depth }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        // 1/8 above and below the work surface
        Self::new(Decimal::new(125, 3), Decimal::new(-125, 3))
    }
}
