//! Column-major matrices over a finite field.
//!
//! A matrix is a `Vec` of columns, each column a `Vec` of field elements of
//! equal length. The decoders only ever build small systems (at most a few
//! rows more than the error-correction capacity), so the determinant is the
//! plain cofactor expansion and elimination is the textbook Gauss-Jordan
//! sweep; neither tries to be clever.
//!
//! Shape mismatches are caller bugs and fail fast with `assert!`.

use rand::Rng;

use crate::field::Field;

/// Matrix operations over the field K, with matrices represented as column
/// vectors.
#[derive(Debug, Clone, Copy)]
pub struct MatrixSpace<'a, F: Field> {
    field: &'a F,
}

impl<'a, F: Field> MatrixSpace<'a, F> {
    pub fn new(field: &'a F) -> Self {
        MatrixSpace { field }
    }

    /// The coefficient field.
    pub fn field(&self) -> &'a F {
        self.field
    }

    /// The zero matrix with `rows` rows and `cols` columns.
    pub fn zero(&self, rows: usize, cols: usize) -> Vec<Vec<F::Element>> {
        vec![vec![self.field.zero(); rows]; cols]
    }

    /// The n×n identity matrix.
    pub fn identity(&self, n: usize) -> Vec<Vec<F::Element>> {
        let mut id = self.zero(n, n);
        for (i, col) in id.iter_mut().enumerate() {
            col[i] = self.field.one();
        }
        id
    }

    pub fn add(
        &self,
        a: &[Vec<F::Element>],
        b: &[Vec<F::Element>],
    ) -> Vec<Vec<F::Element>> {
        assert_eq!(a.len(), b.len(), "matrix shapes must match");
        a.iter()
            .zip(b.iter())
            .map(|(ca, cb)| {
                assert_eq!(ca.len(), cb.len(), "matrix shapes must match");
                ca.iter()
                    .zip(cb.iter())
                    .map(|(x, y)| self.field.add(x, y))
                    .collect()
            })
            .collect()
    }

    pub fn neg(&self, a: &[Vec<F::Element>]) -> Vec<Vec<F::Element>> {
        a.iter()
            .map(|col| col.iter().map(|x| self.field.neg(x)).collect())
            .collect()
    }

    /// Matrix product a·b.
    pub fn mul(
        &self,
        a: &[Vec<F::Element>],
        b: &[Vec<F::Element>],
    ) -> Vec<Vec<F::Element>> {
        let a_rows = a.first().map_or(0, Vec::len);
        let b_rows = b.first().map_or(0, Vec::len);
        assert_eq!(b_rows, a.len(), "inner dimensions must match");
        let mut product = self.zero(a_rows, b.len());
        for (i, out_col) in product.iter_mut().enumerate() {
            for (j, out) in out_col.iter_mut().enumerate() {
                let mut acc = self.field.zero();
                for (a_col, b_entry) in a.iter().zip(b[i].iter()) {
                    acc = self.field.add(&acc, &self.field.mul(&a_col[j], b_entry));
                }
                *out = acc;
            }
        }
        product
    }

    /// Determinant of a square matrix by cofactor expansion along the first
    /// row. O(n!), only suitable for the small systems the decoders build.
    pub fn det(&self, a: &[Vec<F::Element>]) -> F::Element {
        if a.is_empty() {
            return self.field.zero();
        }
        assert_eq!(a[0].len(), a.len(), "determinant needs a square matrix");
        if a.len() == 1 {
            return a[0][0].clone();
        }
        if a.len() == 2 {
            return self.field.sub(
                &self.field.mul(&a[0][0], &a[1][1]),
                &self.field.mul(&a[0][1], &a[1][0]),
            );
        }
        let mut det = self.field.zero();
        for j in 0..a.len() {
            let minor: Vec<Vec<F::Element>> = a
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != j)
                .map(|(_, col)| col[1..].to_vec())
                .collect();
            let mut cofactor = self.det(&minor);
            if j % 2 == 1 {
                cofactor = self.field.neg(&cofactor);
            }
            det = self.field.add(&det, &self.field.mul(&a[j][0], &cofactor));
        }
        det
    }

    /// Gauss-Jordan elimination to reduced row-echelon form.
    ///
    /// For each column, left to right, the first row that holds a nonzero
    /// entry and is not yet a pivot row becomes the pivot: the row is scaled
    /// so the pivot entry is one, then the column is cleared from every
    /// other row. Columns without such an entry are left alone, so singular
    /// and rectangular systems pass through with their free columns intact.
    ///
    /// Returns the reduced matrix and the pivot row of each pivoted column
    /// in processing order. The sweep is fully deterministic.
    pub fn gauss_jordan(
        &self,
        mut a: Vec<Vec<F::Element>>,
    ) -> (Vec<Vec<F::Element>>, Vec<usize>) {
        let rows = a.first().map_or(0, Vec::len);
        let zero = self.field.zero();
        let mut pivots: Vec<usize> = Vec::new();
        for j in 0..a.len() {
            let mut i = 0;
            while i < rows && (a[j][i] == zero || pivots.contains(&i)) {
                i += 1;
            }
            if i < rows {
                pivots.push(i);
                let inv = self
                    .field
                    .inv(&a[j][i])
                    .expect("pivot entry is nonzero");
                for col in a[j..].iter_mut() {
                    let scaled = self.field.mul(&inv, &col[i]);
                    col[i] = scaled;
                }
                for l in 0..rows {
                    if l != i {
                        let factor = self.field.neg(&a[j][l]);
                        for col in a[j..].iter_mut() {
                            let scaled = self.field.mul(&factor, &col[i]);
                            let updated = self.field.add(&col[l], &scaled);
                            col[l] = updated;
                        }
                    }
                }
            }
        }
        (a, pivots)
    }

    /// A matrix of independently sampled entries.
    pub fn random<R: Rng + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Vec<Vec<F::Element>> {
        (0..cols)
            .map(|_| (0..rows).map(|_| self.field.sample(rng)).collect())
            .collect()
    }
}
