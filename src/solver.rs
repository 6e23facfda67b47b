use crate::solution::{AssignmentSolution, UnsignedInt};
use anyhow;
use anyhow::{anyhow as anyhow_error, ensure, Result};
use num_iter;
use num_traits::AsPrimitive;
use tracing::trace;

/// Options recognized by `AssignmentSolver::solve`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Report columns numbered from 1 with 0 marking unassigned rows.
    /// Otherwise columns are numbered from 0 and unassigned rows hold `I::max_value()`.
    pub one_based_output: bool,
    /// Non-finite costs mark forbidden pairs. When disabled non-finite costs are rejected.
    pub treat_non_finite_as_forbidden: bool,
    /// Find the assignment with the maximal total value instead of the minimal one.
    pub maximize: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            one_based_output: true,
            treat_non_finite_as_forbidden: true,
            maximize: false,
        }
    }
}

/// Solver for the dense linear assignment problem.
///
/// Costs are stored column-major: value of (row, column) lives at `row + num_rows * column`.
pub trait AssignmentSolver<I: UnsignedInt>: Sized {
    fn new(row_capacity: usize, column_capacity: usize) -> (Self, AssignmentSolution<I>);

    fn num_rows(&self) -> I;
    fn num_cols(&self) -> I;
    fn num_rows_mut(&mut self) -> &mut I;
    fn num_cols_mut(&mut self) -> &mut I;
    fn values(&self) -> &Vec<f64>;
    fn values_mut(&mut self) -> &mut Vec<f64>;

    fn solve(
        &mut self,
        solution: &mut AssignmentSolution<I>,
        config: SolverConfig,
    ) -> Result<(), anyhow::Error>;

    #[inline]
    fn init(&mut self, num_rows: I, num_cols: I) -> Result<(), anyhow::Error> {
        ensure!(num_rows < I::max_value());
        ensure!(num_cols < I::max_value());
        let num_of_elements = AsPrimitive::<usize>::as_(num_rows)
            .checked_mul(num_cols.as_())
            .ok_or_else(|| anyhow_error!("cost matrix size overflows usize"))?;
        *self.num_rows_mut() = num_rows;
        *self.num_cols_mut() = num_cols;

        let values = self.values_mut();
        values.clear();
        values
            .try_reserve_exact(num_of_elements)
            .map_err(|e| anyhow_error!("unable to allocate cost matrix: {}", e))?;
        Ok(())
    }

    /// Appends the next value in column-major order.
    #[inline]
    fn add_value(&mut self, row: I, column: I, value: f64) -> Result<(), anyhow::Error> {
        let num_rows: usize = self.num_rows().as_();
        let row_usize: usize = row.as_();
        let column_usize: usize = column.as_();
        ensure!(row_usize < num_rows && column < self.num_cols());
        ensure!(
            row_usize + num_rows * column_usize == self.num_of_elements(),
            "values must be added in column-major order"
        );
        self.values_mut().push(value);
        Ok(())
    }

    #[inline]
    fn extend_from_column(&mut self, column: I, values: &[f64]) -> Result<(), anyhow::Error> {
        let num_rows: usize = self.num_rows().as_();
        ensure!(values.len() == num_rows);
        ensure!(column < self.num_cols());
        ensure!(
            num_rows * AsPrimitive::<usize>::as_(column) == self.num_of_elements(),
            "columns must be added in order"
        );
        self.values_mut().extend_from_slice(values);
        Ok(())
    }

    /// Replaces the whole cost matrix with a column-major buffer.
    fn set_values(&mut self, values: &[f64]) -> Result<(), anyhow::Error> {
        let num_rows: usize = self.num_rows().as_();
        let num_cols: usize = self.num_cols().as_();
        ensure!(
            values.len() == num_rows * num_cols,
            "expected {}x{} values, got {}",
            num_rows,
            num_cols,
            values.len()
        );
        let own = self.values_mut();
        own.clear();
        own.extend_from_slice(values);
        Ok(())
    }

    #[inline]
    fn num_of_elements(&self) -> usize {
        self.values().len()
    }

    /// Returns the total original value of the assigned pairs, skipping non-finite values.
    fn get_objective(&self, solution: &AssignmentSolution<I>) -> f64 {
        let num_rows: usize = self.num_rows().as_();
        let values = self.values();
        let mut obj = 0.;
        for i in num_iter::range(I::zero(), self.num_rows()) {
            let i_usize: usize = i.as_();
            if let Some(j) = solution.column_of(i_usize) {
                let value = values[i_usize + num_rows * j];
                if value.is_finite() {
                    obj += value;
                }
            }
        }
        trace!("objective: {}", obj);
        obj
    }

    fn validate_input(&self) -> Result<(), anyhow::Error> {
        let num_rows: usize = self.num_rows().as_();
        let num_cols: usize = self.num_cols().as_();
        ensure!(
            self.num_of_elements() == num_rows * num_cols,
            "cost matrix is incomplete: {} of {} values",
            self.num_of_elements(),
            num_rows * num_cols
        );
        Ok(())
    }
}
