use crate::extract::compute_assignment_cost;
use crate::solution::{AssignmentSolution, UnsignedInt};
use crate::solver::{AssignmentSolver, SolverConfig};
use crate::state::CoverState;
use anyhow;
use anyhow::{anyhow as anyhow_error, Result};
use tracing::{debug, trace};

/// Solver for the dense linear assignment problem
/// Which finds a minimum cost matching of N rows -> M columns with the Kuhn-Munkres algorithm
#[derive(Clone)]
pub struct MunkresSolver<I: UnsignedInt> {
    num_rows: I,
    num_cols: I,
    // original costs, column-major
    values: Vec<f64>,

    state: CoverState,

    pub num_augmentations: u32,
    pub num_cost_updates: u32,
    pub optimal_soln_found: bool,
}

impl<I: UnsignedInt> AssignmentSolver<I> for MunkresSolver<I> {
    fn new(row_capacity: usize, column_capacity: usize) -> (Self, AssignmentSolution<I>) {
        (
            Self {
                num_rows: I::zero(),
                num_cols: I::zero(),
                values: Vec::with_capacity(row_capacity * column_capacity),

                state: CoverState::with_capacity(row_capacity, column_capacity),

                num_augmentations: 0,
                num_cost_updates: 0,
                optimal_soln_found: false,
            },
            AssignmentSolution::<I>::new(row_capacity),
        )
    }

    fn num_rows(&self) -> I {
        self.num_rows
    }
    fn num_cols(&self) -> I {
        self.num_cols
    }
    fn num_rows_mut(&mut self) -> &mut I {
        &mut self.num_rows
    }
    fn num_cols_mut(&mut self) -> &mut I {
        &mut self.num_cols
    }
    fn values(&self) -> &Vec<f64> {
        &self.values
    }
    fn values_mut(&mut self) -> &mut Vec<f64> {
        &mut self.values
    }

    fn solve(
        &mut self,
        solution: &mut AssignmentSolution<I>,
        config: SolverConfig,
    ) -> Result<(), anyhow::Error> {
        self.validate_input()?;
        let num_rows: usize = self.num_rows.as_();
        let num_cols: usize = self.num_cols.as_();

        self.num_augmentations = 0;
        self.num_cost_updates = 0;
        self.optimal_soln_found = false;
        self.state.reset(num_rows, num_cols)?;
        solution
            .row_to_column
            .try_reserve_exact(num_rows)
            .map_err(|e| anyhow_error!("unable to allocate assignment vector: {}", e))?;
        solution.reset(num_rows, config.one_based_output);

        if num_rows == 0 || num_cols == 0 {
            self.optimal_soln_found = true;
            return Ok(());
        }
        if !self.state.load_costs(&self.values, config)? {
            // every pair is forbidden, nothing to assign
            self.optimal_soln_found = true;
            return Ok(());
        }

        self.state.reduce_and_star();
        let stats = self.state.run()?;
        self.num_augmentations = stats.num_augmentations;
        self.num_cost_updates = stats.num_cost_updates;
        self.optimal_soln_found = true;
        debug!(
            "{}x{} solved with {} augmentations and {} cost updates",
            num_rows, num_cols, self.num_augmentations, self.num_cost_updates
        );

        self.state.build_assignment(solution)?;
        compute_assignment_cost(solution, &self.values, self.num_rows);
        trace!("OBJECTIVE: {:?}", solution.cost);
        trace!("row_to_column: {:?}", solution.row_to_column);
        Ok(())
    }
}

/// Solves the assignment problem for a column-major `values` buffer of `num_rows` x `num_cols` costs.
///
/// ```
/// use munkres_assignment::{assignment_optimal, SolverConfig};
///
/// // [[1, 2],
/// //  [2, 1]]
/// let solution = assignment_optimal::<u32>(&[1., 2., 2., 1.], 2, 2, SolverConfig::default()).unwrap();
/// assert_eq!(solution.row_to_column, [1, 2]);
/// assert_eq!(solution.cost, 2.);
/// ```
pub fn assignment_optimal<I: UnsignedInt>(
    values: &[f64],
    num_rows: I,
    num_cols: I,
    config: SolverConfig,
) -> Result<AssignmentSolution<I>, anyhow::Error> {
    let (mut solver, mut solution) =
        MunkresSolver::<I>::new(num_rows.as_(), num_cols.as_());
    solver.init(num_rows, num_cols)?;
    solver.set_values(values)?;
    solver.solve(&mut solution, config)?;
    Ok(solution)
}
