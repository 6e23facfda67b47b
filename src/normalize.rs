use crate::solver::SolverConfig;
use crate::state::CoverState;
use anyhow;
use anyhow::{bail, Result};
use tracing::{debug, trace};

/// Multiplier of the largest finite cost used to price forbidden pairs.
const FORBIDDEN_COST_FACTOR: f64 = 10.;
/// Price of forbidden pairs when no finite cost is positive.
const FORBIDDEN_COST_FALLBACK: f64 = 10.;
/// Upper bound on the price of forbidden pairs; leaves headroom for the cost updates.
const FORBIDDEN_COST_CEILING: f64 = f64::MAX / 16.;

impl CoverState {
    /// Copies `values` into the working cost matrix.
    ///
    /// Non-finite values are replaced by a finite cost larger than the total of any
    /// assignment built from finite values. With `maximize` finite values `c` become
    /// `max - c` first. Returns `false` when no value is finite, in which case nothing
    /// can be assigned and the working matrix is left empty.
    pub fn load_costs(
        &mut self,
        values: &[f64],
        config: SolverConfig,
    ) -> Result<bool, anyhow::Error> {
        debug_assert_eq!(values.len(), self.num_rows * self.num_cols);
        let mut max_finite = f64::NEG_INFINITY;
        let mut min_finite = f64::INFINITY;
        let mut non_finite_found = false;
        for (idx, &value) in values.iter().enumerate() {
            if value.is_finite() {
                max_finite = max_finite.max(value);
                min_finite = min_finite.min(value);
            } else if config.treat_non_finite_as_forbidden {
                non_finite_found = true;
            } else {
                bail!(
                    "non-finite cost {} at row {}, column {}",
                    value,
                    idx % self.num_rows,
                    idx / self.num_rows
                );
            }
        }
        if !max_finite.is_finite() {
            debug!("all {} costs are forbidden", values.len());
            return Ok(false);
        }

        self.costs.extend_from_slice(values);
        if config.maximize {
            self.costs
                .iter_mut()
                .filter(|c| c.is_finite())
                .for_each(|c| *c = max_finite - *c);
            max_finite -= min_finite;
        }

        if non_finite_found {
            let forbidden_cost = if max_finite > 0. {
                (FORBIDDEN_COST_FACTOR * max_finite * values.len() as f64)
                    .min(FORBIDDEN_COST_CEILING)
            } else {
                FORBIDDEN_COST_FALLBACK
            };
            debug!("forbidden pairs priced at {}", forbidden_cost);
            self.costs
                .iter_mut()
                .filter(|c| !c.is_finite())
                .for_each(|c| *c = forbidden_cost);
        }
        Ok(true)
    }

    /// Reduces rows (or columns for tall matrices) by their minimum and stars
    /// the first available zero of each row (column).
    pub fn reduce_and_star(&mut self) {
        let num_rows = self.num_rows;
        if num_rows <= self.num_cols {
            for row in 0..num_rows {
                let min_value = self
                    .costs
                    .iter()
                    .skip(row)
                    .step_by(num_rows)
                    .fold(f64::INFINITY, |acc, &c| acc.min(c));
                self.costs
                    .iter_mut()
                    .skip(row)
                    .step_by(num_rows)
                    .for_each(|c| *c -= min_value);
            }

            for row in 0..num_rows {
                for col in 0..self.num_cols {
                    if self.is_zero(row, col) && !self.covered_columns[col] {
                        let idx = self.idx(row, col);
                        self.starred[idx] = true;
                        self.covered_columns[col] = true;
                        break;
                    }
                }
            }
        } else {
            for column in self.costs.chunks_mut(num_rows) {
                let min_value = column.iter().fold(f64::INFINITY, |acc, &c| acc.min(c));
                column.iter_mut().for_each(|c| *c -= min_value);
            }

            for col in 0..self.num_cols {
                for row in 0..num_rows {
                    if self.is_zero(row, col) && !self.covered_rows[row] {
                        let idx = self.idx(row, col);
                        self.starred[idx] = true;
                        self.covered_columns[col] = true;
                        self.covered_rows[row] = true;
                        break;
                    }
                }
            }
            // row covers only kept the initial stars independent
            self.covered_rows.iter_mut().for_each(|c| *c = false);
        }
        trace!("reduced costs: {:?}", self.costs);
        trace!("initial stars: {}", self.num_starred());
    }
}
