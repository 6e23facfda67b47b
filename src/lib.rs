//! Optimal solver for the dense rectangular linear assignment problem.
//!
//! Given an `n x m` cost matrix stored column-major, finds a matching of
//! `min(n, m)` rows and columns with minimal (or maximal) total cost using the
//! Kuhn-Munkres algorithm. Non-finite costs mark pairs that must not be matched.
//!
//! ```
//! use munkres_assignment::{AssignmentSolver, MunkresSolver, SolverConfig};
//!
//! let (mut solver, mut solution) = MunkresSolver::<u32>::new(2, 3);
//! solver.init(2, 3).unwrap();
//! // [[3, 1, 2],
//! //  [1, 4, 2]]
//! solver.extend_from_column(0, &[3., 1.]).unwrap();
//! solver.extend_from_column(1, &[1., 4.]).unwrap();
//! solver.extend_from_column(2, &[2., 2.]).unwrap();
//! solver.solve(&mut solution, SolverConfig::default()).unwrap();
//! assert_eq!(solution.row_to_column, [2, 1]);
//! assert_eq!(solution.cost, 2.);
//! ```
mod engine;
mod extract;
pub mod munkres;
mod normalize;
pub mod solution;
mod solver;
mod state;

pub use munkres::{assignment_optimal, MunkresSolver};
pub use solution::{AssignmentSolution, UnsignedInt};
pub use solver::{AssignmentSolver, SolverConfig};
