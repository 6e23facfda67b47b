use crate::solution::{AssignmentSolution, UnsignedInt};
use crate::state::CoverState;
use anyhow;
use anyhow::{anyhow as anyhow_error, Result};
use num_iter;
use tracing::trace;

impl CoverState {
    /// Writes the starred column of every row into `solution.row_to_column`.
    ///
    /// `solution` must have been reset for `num_rows` rows.
    pub fn build_assignment<I: UnsignedInt>(
        &self,
        solution: &mut AssignmentSolution<I>,
    ) -> Result<(), anyhow::Error> {
        let offset = if solution.one_based { 1 } else { 0 };
        let mut num_assigned = 0;
        for row in 0..self.num_rows {
            if let Some(col) = self.star_in_row(row) {
                solution.row_to_column[row] = I::from_usize(col + offset)
                    .ok_or_else(|| anyhow_error!("column {} does not fit index type", col))?;
                num_assigned += 1;
            }
        }
        solution.num_unassigned = I::from_usize(self.num_rows - num_assigned)
            .ok_or_else(|| anyhow_error!("row count does not fit index type"))?;
        Ok(())
    }
}

/// Sums the original `values` over the assigned pairs of `solution`.
///
/// Rows assigned to a pair with a non-finite original value are unassigned
/// instead of being counted.
pub(crate) fn compute_assignment_cost<I: UnsignedInt>(
    solution: &mut AssignmentSolution<I>,
    values: &[f64],
    num_rows: I,
) {
    let num_rows_usize: usize = num_rows.as_();
    let marker = solution.unassigned_marker();
    let mut cost = 0.;
    for i in num_iter::range(I::zero(), num_rows) {
        let i_usize: usize = i.as_();
        let j = match solution.column_of(i_usize) {
            Some(j) => j,
            None => continue,
        };
        let value = values[i_usize + num_rows_usize * j];
        if value.is_finite() {
            cost += value;
        } else {
            trace!("row {} dropped from forbidden column {}", i_usize, j);
            solution.row_to_column[i_usize] = marker;
            solution.num_unassigned += I::one();
        }
    }
    solution.cost = cost;
}

#[cfg(test)]
mod tests {
    use super::compute_assignment_cost;
    use crate::solution::AssignmentSolution;
    use crate::state::CoverState;

    fn starred_state(num_rows: usize, num_cols: usize, stars: &[(usize, usize)]) -> CoverState {
        let mut state = CoverState::with_capacity(num_rows, num_cols);
        state.reset(num_rows, num_cols).unwrap();
        for &(row, col) in stars {
            let idx = state.idx(row, col);
            state.starred[idx] = true;
        }
        state
    }

    #[test]
    fn test_one_based_vector() {
        let state = starred_state(3, 2, &[(0, 1), (2, 0)]);
        let mut solution = AssignmentSolution::<u16>::new(3);
        solution.reset(3, true);
        state.build_assignment(&mut solution).unwrap();
        assert_eq!(solution.row_to_column, [2, 0, 1]);
        assert_eq!(solution.num_unassigned, 1);
    }

    #[test]
    fn test_zero_based_vector() {
        let state = starred_state(3, 2, &[(0, 1), (2, 0)]);
        let mut solution = AssignmentSolution::<u32>::new(3);
        solution.reset(3, false);
        state.build_assignment(&mut solution).unwrap();
        assert_eq!(solution.row_to_column, [1, u32::MAX, 0]);
    }

    #[test]
    fn test_forbidden_pair_is_dropped() {
        // [[1, inf],
        //  [inf, inf]]
        let inf = f64::INFINITY;
        let values = [1., inf, inf, inf];
        let state = starred_state(2, 2, &[(0, 0), (1, 1)]);
        let mut solution = AssignmentSolution::<u16>::new(2);
        solution.reset(2, true);
        state.build_assignment(&mut solution).unwrap();
        assert_eq!(solution.num_unassigned, 0);

        compute_assignment_cost(&mut solution, &values, 2);
        assert_eq!(solution.row_to_column, [1, 0]);
        assert_eq!(solution.num_unassigned, 1);
        assert_eq!(solution.cost, 1.);
    }
}
