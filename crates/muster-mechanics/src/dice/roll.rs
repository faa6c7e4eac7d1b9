//! The faces a throw turned up.

use serde::{Deserialize, Serialize};

use super::DiceExpr;

/// One throw of a dice expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    expr: DiceExpr,
    faces: Vec<u32>,
}

impl RollResult {
    /// Record the faces thrown for `expr`.
    pub fn new(expr: DiceExpr, faces: Vec<u32>) -> Self {
        Self { expr, faces }
    }

    /// What was thrown.
    pub fn expr(&self) -> DiceExpr {
        self.expr
    }

    /// Each die's face, in throw order.
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Sum of the faces.
    pub fn total(&self) -> u32 {
        self.faces.iter().sum()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(u32::to_string).collect();
        write!(f, "{} [{}] = {}", self.expr, faces.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_and_display() {
        let r = RollResult::new(DiceExpr::TWO_D6, vec![3, 5]);
        assert_eq!(r.total(), 8);
        assert_eq!(r.to_string(), "2d6 [3, 5] = 8");
    }
}
