//! Wire identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a qubit wire.
///
/// Wires are opaque labels: decompositions never interpret the number,
/// they only compare wires for equality and preserve their order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Build a list of wires from plain integers.
///
/// ```rust
/// use ctrlq_ir::{QubitId, wires};
///
/// assert_eq!(wires([1, 2]), vec![QubitId(1), QubitId(2)]);
/// ```
pub fn wires(ids: impl IntoIterator<Item = u32>) -> Vec<QubitId> {
    ids.into_iter().map(QubitId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId(0)), "q0");
        assert_eq!(format!("{}", QubitId(17)), "q17");
    }

    #[test]
    fn test_wires_preserves_order() {
        let ws = wires([3, 1, 2]);
        assert_eq!(ws, vec![QubitId(3), QubitId(1), QubitId(2)]);
    }
}
