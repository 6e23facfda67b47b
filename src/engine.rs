use crate::state::CoverState;
use anyhow;
use anyhow::{anyhow as anyhow_error, ensure, Result};
use tracing::trace;

/// Phases of the cover/augment loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// cover every column holding a starred zero
    CoverColumns,
    /// stop once `min_dim` columns are covered
    CheckDone,
    /// prime uncovered zeros until one starts an augmenting path
    FindZeros,
    /// flip the alternating path starting at the primed zero (row, col)
    Augment { row: usize, col: usize },
    /// shift costs by the smallest uncovered value
    UpdateCosts,
    Done,
}

/// Counters collected while running the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EngineStats {
    pub num_augmentations: u32,
    pub num_cost_updates: u32,
}

impl CoverState {
    /// Runs the phases from `CoverColumns` until the stars form a matching of size `min_dim`.
    pub fn run(&mut self) -> Result<EngineStats, anyhow::Error> {
        let mut stats = EngineStats::default();
        let mut step = Step::CoverColumns;
        while step != Step::Done {
            match step {
                Step::Augment { .. } => stats.num_augmentations += 1,
                Step::UpdateCosts => stats.num_cost_updates += 1,
                _ => {}
            }
            step = self.advance(step)?;
        }
        Ok(stats)
    }

    /// Executes a single phase and returns the next one.
    pub fn advance(&mut self, step: Step) -> Result<Step, anyhow::Error> {
        trace!("{:?}", step);
        match step {
            Step::CoverColumns => {
                self.cover_starred_columns();
                Ok(Step::CheckDone)
            }
            Step::CheckDone => Ok(self.check_done()),
            Step::FindZeros => Ok(self.find_zeros()),
            Step::Augment { row, col } => {
                self.augment(row, col)?;
                Ok(Step::CoverColumns)
            }
            Step::UpdateCosts => {
                self.update_costs()?;
                Ok(Step::FindZeros)
            }
            Step::Done => Ok(Step::Done),
        }
    }

    fn cover_starred_columns(&mut self) {
        for col in 0..self.num_cols {
            self.covered_columns[col] = self.star_in_column(col).is_some();
        }
    }

    fn check_done(&self) -> Step {
        let num_covered = self.num_covered_columns();
        debug_assert_eq!(num_covered, self.num_starred());
        if num_covered == self.min_dim {
            Step::Done
        } else {
            Step::FindZeros
        }
    }

    fn find_zeros(&mut self) -> Step {
        let mut zeros_found = true;
        while zeros_found {
            zeros_found = false;
            for col in 0..self.num_cols {
                if self.covered_columns[col] {
                    continue;
                }
                for row in 0..self.num_rows {
                    if self.covered_rows[row] || !self.is_zero(row, col) {
                        continue;
                    }
                    let idx = self.idx(row, col);
                    self.primed[idx] = true;

                    match self.star_in_row(row) {
                        None => return Step::Augment { row, col },
                        Some(star_col) => {
                            self.covered_rows[row] = true;
                            self.covered_columns[star_col] = false;
                            zeros_found = true;
                            break;
                        }
                    }
                }
            }
        }
        Step::UpdateCosts
    }

    fn augment(&mut self, row: usize, col: usize) -> Result<(), anyhow::Error> {
        let mut row = row;
        let mut col = col;
        loop {
            // look up the star before placing the new one in the same column
            let star_row = self.star_in_column(col);
            let idx = self.idx(row, col);
            self.starred[idx] = true;

            let star_row = match star_row {
                Some(star_row) => star_row,
                None => break,
            };
            let idx = self.idx(star_row, col);
            self.starred[idx] = false;

            col = self.prime_in_row(star_row).ok_or_else(|| {
                anyhow_error!("starred zero at ({}, {}) has no primed partner", star_row, col)
            })?;
            row = star_row;
        }

        self.primed.iter_mut().for_each(|p| *p = false);
        self.covered_rows.iter_mut().for_each(|c| *c = false);
        trace!("stars after augmentation: {}", self.num_starred());
        Ok(())
    }

    fn update_costs(&mut self) -> Result<(), anyhow::Error> {
        let num_rows = self.num_rows;
        let mut h = f64::INFINITY;
        for (col, column) in self.costs.chunks(num_rows).enumerate() {
            if self.covered_columns[col] {
                continue;
            }
            for (row, &value) in column.iter().enumerate() {
                if !self.covered_rows[row] && value < h {
                    h = value;
                }
            }
        }
        ensure!(h.is_finite(), "no uncovered cost left to update");
        debug_assert!(h > 0., "uncovered zero missed: h = {}", h);
        trace!("h: {}", h);

        for (col, column) in self.costs.chunks_mut(num_rows).enumerate() {
            let col_covered = self.covered_columns[col];
            for (row, value) in column.iter_mut().enumerate() {
                if self.covered_rows[row] {
                    *value += h;
                }
                if !col_covered {
                    *value -= h;
                }
            }
        }
        Ok(())
    }
}
