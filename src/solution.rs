use num_traits::{AsPrimitive, FromPrimitive, NumAssign, PrimInt, Unsigned};
use std::fmt::{Debug, Display};

pub trait UnsignedInt:
    PrimInt
    + Unsigned
    + Display
    + Debug
    + AsPrimitive<usize>
    + AsPrimitive<f64>
    + FromPrimitive
    + NumAssign
{
}

impl<T> UnsignedInt for T where
    T: PrimInt
        + Unsigned
        + Display
        + Debug
        + AsPrimitive<usize>
        + AsPrimitive<f64>
        + FromPrimitive
        + NumAssign
{
}

///
/// Solution of the linear assignment problem
///
#[derive(Debug, Clone)]
pub struct AssignmentSolution<I>
where
    I: UnsignedInt,
{
    /// index i gives the column assigned to row i
    ///
    /// With one-based output columns are numbered from 1 and unassigned rows are marked by 0.
    /// With zero-based output columns are numbered from 0 and unassigned rows are marked by
    /// MAX value of the integer type (u32::MAX for u32).
    pub row_to_column: Vec<I>,
    /// sum of the original cost values over the assigned pairs
    pub cost: f64,
    /// number of rows left without a column
    pub num_unassigned: I,
    /// indexing convention used by `row_to_column`
    pub one_based: bool,
}

impl<I> AssignmentSolution<I>
where
    I: UnsignedInt,
{
    pub fn new(row_capacity: usize) -> AssignmentSolution<I> {
        AssignmentSolution::<I> {
            row_to_column: Vec::with_capacity(row_capacity),
            cost: f64::NAN,
            num_unassigned: I::max_value(),
            one_based: true,
        }
    }

    /// Value stored in `row_to_column` for rows without an assignment.
    #[inline]
    pub fn unassigned_marker(&self) -> I {
        if self.one_based {
            I::zero()
        } else {
            I::max_value()
        }
    }

    /// Zero-based column assigned to `row`, if any.
    pub fn column_of(&self, row: usize) -> Option<usize> {
        let column = *self.row_to_column.get(row)?;
        if column == self.unassigned_marker() {
            None
        } else {
            let column: usize = column.as_();
            Some(if self.one_based { column - 1 } else { column })
        }
    }

    /// Iterates over assigned (row, column) pairs, both zero-based.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.row_to_column.len()).filter_map(move |row| self.column_of(row).map(|c| (row, c)))
    }

    pub fn num_assigned(&self) -> usize {
        let num_unassigned: usize = self.num_unassigned.as_();
        self.row_to_column.len() - num_unassigned
    }

    pub(crate) fn reset(&mut self, num_rows: usize, one_based: bool) {
        self.one_based = one_based;
        self.cost = 0.;
        let marker = self.unassigned_marker();
        self.row_to_column.clear();
        self.row_to_column.resize(num_rows, marker);
        self.num_unassigned = I::from_usize(num_rows).unwrap_or_else(I::max_value);
    }
}
