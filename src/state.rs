use anyhow;
use anyhow::{anyhow as anyhow_error, Result};

/// Working buffers of a single solve.
///
/// All matrices are column-major with `num_rows` as the leading dimension.
#[derive(Debug, Clone, Default)]
pub(crate) struct CoverState {
    pub num_rows: usize,
    pub num_cols: usize,
    pub min_dim: usize,
    // working copy of the cost matrix
    pub costs: Vec<f64>,
    pub starred: Vec<bool>,
    pub primed: Vec<bool>,
    pub covered_rows: Vec<bool>,
    pub covered_columns: Vec<bool>,
}

fn reset_buffer<T: Clone>(buffer: &mut Vec<T>, len: usize, value: T) -> Result<(), anyhow::Error> {
    buffer.clear();
    buffer
        .try_reserve_exact(len)
        .map_err(|e| anyhow_error!("unable to allocate {} working cells: {}", len, e))?;
    buffer.resize(len, value);
    Ok(())
}

impl CoverState {
    pub fn with_capacity(row_capacity: usize, column_capacity: usize) -> CoverState {
        let elements = row_capacity * column_capacity;
        CoverState {
            num_rows: 0,
            num_cols: 0,
            min_dim: 0,
            costs: Vec::with_capacity(elements),
            starred: Vec::with_capacity(elements),
            primed: Vec::with_capacity(elements),
            covered_rows: Vec::with_capacity(row_capacity),
            covered_columns: Vec::with_capacity(column_capacity),
        }
    }

    /// Sizes all buffers for a `num_rows` x `num_cols` problem and clears marks and covers.
    /// The cost buffer is left empty for the normalizer to fill.
    pub fn reset(&mut self, num_rows: usize, num_cols: usize) -> Result<(), anyhow::Error> {
        let elements = num_rows * num_cols;
        self.num_rows = num_rows;
        self.num_cols = num_cols;
        self.min_dim = num_rows.min(num_cols);

        self.costs.clear();
        self.costs
            .try_reserve_exact(elements)
            .map_err(|e| anyhow_error!("unable to allocate cost matrix: {}", e))?;
        reset_buffer(&mut self.starred, elements, false)?;
        reset_buffer(&mut self.primed, elements, false)?;
        reset_buffer(&mut self.covered_rows, num_rows, false)?;
        reset_buffer(&mut self.covered_columns, num_cols, false)?;
        Ok(())
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row + self.num_rows * col
    }

    #[inline]
    pub fn is_zero(&self, row: usize, col: usize) -> bool {
        self.costs[self.idx(row, col)] == 0.
    }

    #[inline]
    pub fn star_in_row(&self, row: usize) -> Option<usize> {
        (0..self.num_cols).find(|&col| self.starred[self.idx(row, col)])
    }

    #[inline]
    pub fn star_in_column(&self, col: usize) -> Option<usize> {
        let start = self.num_rows * col;
        self.starred[start..start + self.num_rows]
            .iter()
            .position(|&s| s)
    }

    #[inline]
    pub fn prime_in_row(&self, row: usize) -> Option<usize> {
        (0..self.num_cols).find(|&col| self.primed[self.idx(row, col)])
    }

    pub fn num_starred(&self) -> usize {
        self.starred.iter().filter(|&&s| s).count()
    }

    pub fn num_covered_columns(&self) -> usize {
        self.covered_columns.iter().filter(|&&c| c).count()
    }
}
