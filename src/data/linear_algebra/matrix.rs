//! # Matrix implementations
//!
//! A dense square matrix, used both for capacities and for flows.
use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

/// Uses a single row major `Vec<T>` as underlying data structure. Dimensions are fixed at
/// creation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    len: usize,
}

impl<T: Clone> SquareMatrix<T> {
    /// Create a matrix of dimension `len` x `len` with all values equal to `value`.
    pub fn constant(value: T, len: usize) -> Self {
        Self {
            data: vec![value; len * len],
            len,
        }
    }
}

impl<T> SquareMatrix<T> {
    /// Create a matrix from its rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Values per row, each row as long as there are rows.
    ///
    /// # Panics
    ///
    /// When a row has a different length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let len = rows.len();
        assert!(rows.iter().all(|row| row.len() == len), "rows of a square matrix differ in length");

        Self {
            data: rows.into_iter().flatten().collect(),
            len,
        }
    }

    /// Number of rows, which is also the number of columns.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the matrix has no rows or columns.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[T] {
        debug_assert!(i < self.len);

        &self.data[(i * self.len)..((i + 1) * self.len)]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        // `chunks_exact` panics on a zero chunk size
        self.data.chunks_exact(self.len.max(1))
    }

    /// Iterate over the column values of row `i` together with their column index.
    pub fn iter_row(&self, i: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.row(i).iter().enumerate()
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.len);
        debug_assert!(j < self.len);

        &self.data[i * self.len + j]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.len);
        debug_assert!(j < self.len);

        &mut self.data[i * self.len + j]
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::SquareMatrix;

    #[test]
    fn constant() {
        let matrix = SquareMatrix::constant(0, 3);
        assert_eq!(matrix.len(), 3);
        assert!(matrix.rows().all(|row| row == [0, 0, 0]));

        let empty = SquareMatrix::constant(0, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.rows().count(), 0);
    }

    #[test]
    fn index() {
        let mut matrix = SquareMatrix::from_rows(vec![
            vec![1, 2],
            vec![3, 4],
        ]);
        assert_eq!(matrix[(0, 1)], 2);
        assert_eq!(matrix[(1, 0)], 3);

        matrix[(1, 0)] = 5;
        assert_eq!(matrix.row(1), &[5, 4]);
        assert_eq!(matrix.iter_row(0).collect::<Vec<_>>(), vec![(0, &1), (1, &2)]);
    }

    #[test]
    #[should_panic]
    fn ragged_rows() {
        let _ = SquareMatrix::from_rows(vec![
            vec![0, 2, 0],
            vec![0, 0],
        ]);
    }
}
