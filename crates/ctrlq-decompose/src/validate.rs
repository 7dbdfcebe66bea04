//! Input checks shared by the decompositions.

use ctrlq_ir::{IrError, Operator, QubitId, Unitary2x2};
use rustc_hash::FxHashSet;

use crate::error::{DecomposeError, DecomposeResult};

/// The wire of a single-qubit operator, or [`DecomposeError::NotSingleQubit`].
pub(crate) fn single_qubit_wire(target: &dyn Operator) -> DecomposeResult<QubitId> {
    match target.wires() {
        [wire] => Ok(*wire),
        wires => Err(DecomposeError::NotSingleQubit {
            name: target.kind_name().to_string(),
            num_wires: wires.len(),
        }),
    }
}

/// The 2x2 matrix of a single-qubit operator.
pub(crate) fn single_qubit_matrix(target: &dyn Operator) -> DecomposeResult<Unitary2x2> {
    Ok(Unitary2x2::from_slice(&target.matrix())?)
}

/// Control wires must be distinct and must not include the target.
pub(crate) fn control_wires(target: QubitId, controls: &[QubitId]) -> DecomposeResult<()> {
    let mut seen = FxHashSet::default();
    for &control in controls {
        if control == target {
            return Err(IrError::TargetInControls { qubit: control }.into());
        }
        if !seen.insert(control) {
            return Err(IrError::DuplicateQubit {
                qubit: control,
                op_name: None,
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctrlq_ir::{Gate, wires};

    #[test]
    fn test_single_qubit_wire() {
        assert_eq!(
            single_qubit_wire(&Gate::rx(0.1, QubitId(4))).unwrap(),
            QubitId(4)
        );

        let cx = Gate::cx(QubitId(0), QubitId(1)).unwrap();
        match single_qubit_wire(&cx) {
            Err(DecomposeError::NotSingleQubit { name, num_wires }) => {
                assert_eq!(name, "cx");
                assert_eq!(num_wires, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let labelled = Gate::cx(QubitId(0), QubitId(1)).unwrap().with_label("my_label");
        let err = single_qubit_wire(&labelled).unwrap_err();
        assert!(err.to_string().ends_with("instead got cx."), "{err}");
    }

    #[test]
    fn test_control_wires() {
        assert!(control_wires(QubitId(0), &wires([1, 2, 3])).is_ok());
        assert!(control_wires(QubitId(0), &[]).is_ok());

        let err = control_wires(QubitId(0), &wires([1, 0])).unwrap_err();
        assert!(matches!(
            err,
            DecomposeError::Ir(IrError::TargetInControls { .. })
        ));

        let err = control_wires(QubitId(0), &wires([1, 2, 1])).unwrap_err();
        assert!(matches!(
            err,
            DecomposeError::Ir(IrError::DuplicateQubit { .. })
        ));
    }
}
