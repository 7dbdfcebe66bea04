//! Controlled Single-Qubit Decompositions
//!
//! This crate rewrites a single-qubit operator controlled on any number of
//! wires into rotations, single-qubit unitaries and multiply-controlled X
//! gates. Decompositions are pure: they return the operation sequence and
//! only record it into a [`QueuingContext`](ctrlq_ir::QueuingContext) when
//! a `_queued` variant is used.
//!
//! # Decompositions
//!
//! | Function | Accepts | Output |
//! |----------|---------|--------|
//! | [`ctrl_decomp_zyz`] | any single-qubit operator | 2 to 7 operations, two MCX |
//! | [`ctrl_decomp_bisect_od`] | SU(2) form with real off-diagonal | exactly 8 operations, four MCX on half the controls |
//!
//! Both match the controlled operator exactly for SU(2) inputs. Other
//! operators are matched up to their global phase, which becomes a relative
//! phase between the control subspaces.
//!
//! # Example
//!
//! ```rust
//! use ctrlq_decompose::{ctrl_decomp_bisect_od, ctrl_decomp_zyz};
//! use ctrlq_ir::{Gate, QubitId, wires};
//!
//! let target = Gate::ry(0.8, QubitId(0));
//! let controls = wires([1, 2, 3, 4]);
//!
//! let zyz = ctrl_decomp_zyz(&target, &controls)?;
//! assert_eq!(zyz.len(), 4);
//!
//! let bisect = ctrl_decomp_bisect_od(&target, &controls)?;
//! assert_eq!(bisect.len(), 8);
//! assert_eq!(bisect[0].controls(), &controls[..2]);
//! # Ok::<(), ctrlq_decompose::DecomposeError>(())
//! ```
//!
//! # Configuration
//!
//! Tolerances and root-finder limits live in [`DecomposeConfig`], which can
//! be loaded from YAML and passed to [`ZyzDecomposer::with_config`] or
//! [`BisectOdDecomposer::with_config`].

pub mod bisect;
pub mod bisect_factor;
pub mod config;
pub mod error;
pub mod euler;
pub mod su2;
mod validate;
pub mod zyz;

pub use bisect::{BisectOdDecomposer, ctrl_decomp_bisect_od, ctrl_decomp_bisect_od_queued};
pub use bisect_factor::compute_bisection_factor;
pub use config::{DecomposeConfig, SolverConfig};
pub use error::{DecomposeError, DecomposeResult};
pub use euler::{to_su2, zyz_decomposition};
pub use su2::param_su2;
pub use zyz::{ZyzDecomposer, ctrl_decomp_zyz, ctrl_decomp_zyz_queued};
