//! # Sparse derivative vector
//!
//! A quantity only tracks the variables it actually depends on, so partial
//! derivatives are stored as `(index, partial)` pairs rather than as a dense
//! gradient. Two invariants hold for every `SparseDeriv` produced by this crate:
//! - indices are strictly ascending;
//! - every index appears at most once.
//!
//! Zero partials are NOT pruned: a consumer may meet explicit `0.0` entries and
//! must only rely on the ordering/uniqueness invariants.
//!
//! ## Merge-join
//! A binary operator between two quantities walks both vectors with two cursors
//! at once (`itertools::merge_join_by`). Each step is one of three cases:
//! - index only on the left  -> `f(x, y, dx, 0.0)`
//! - index only on the right -> `f(x, y, 0.0, dy)`
//! - index on both sides     -> `f(x, y, dx, dy)`
//!
//! An exhausted side simply stops producing elements, the other side is drained
//! as "one-sided" entries. The walk is linear in `len(a) + len(b)`.

use itertools::{EitherOrBoth, Itertools};
use log::trace;
use std::fmt;

#[derive(Clone, Debug, Default)]
pub struct SparseDeriv {
    entries: Vec<(usize, f64)>,
}

impl SparseDeriv {
    /// empty derivative vector (a constant)
    pub fn new() -> Self {
        SparseDeriv {
            entries: Vec::new(),
        }
    }
    /// derivative vector of the independent variable `idx`: d(x_idx)/d(x_idx) = 1
    pub fn seed(idx: usize) -> Self {
        SparseDeriv {
            entries: vec![(idx, 1.0)],
        }
    }

    /// partial derivative with respect to variable `idx`, 0.0 if the variable is not tracked
    pub fn get(&self, idx: usize) -> f64 {
        match self.entries.binary_search_by_key(&idx, |&(i, _)| i) {
            Ok(pos) => self.entries[pos].1,
            Err(_) => 0.0,
        }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (usize, f64)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.entries.iter().map(|&(i, _)| i).collect()
    }

    /// true if the indices are strictly ascending (and hence unique)
    pub fn is_well_formed(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 < w[1].0)
    }

    /// Walks the union of the indices of `a` and `b` in ascending order, yielding
    /// `(index, da, db)`; a partial missing on one side is reported as 0.0.
    pub fn zip_union<'a>(
        a: &'a SparseDeriv,
        b: &'a SparseDeriv,
    ) -> impl Iterator<Item = (usize, f64, f64)> + 'a {
        a.entries
            .iter()
            .merge_join_by(b.entries.iter(), |l, r| l.0.cmp(&r.0))
            .map(|step| match step {
                EitherOrBoth::Left(&(i, da)) => (i, da, 0.0),
                EitherOrBoth::Right(&(j, db)) => (j, 0.0, db),
                EitherOrBoth::Both(&(i, da), &(_, db)) => (i, da, db),
            })
    }

    /// Combines the derivative vectors of two quantities with values `x` and `y`.
    /// `f(x, y, dx, dy)` returns the partial of the result for one variable.
    /// Both inputs must be well formed, this is not checked in release builds.
    pub fn merge<F>(a: &SparseDeriv, b: &SparseDeriv, x: f64, y: f64, f: F) -> SparseDeriv
    where
        F: Fn(f64, f64, f64, f64) -> f64,
    {
        debug_assert!(a.is_well_formed() && b.is_well_formed());
        let mut entries = Vec::with_capacity(a.len().max(b.len()));
        for (i, da, db) in Self::zip_union(a, b) {
            entries.push((i, f(x, y, da, db)));
        }
        trace!(
            "merged {} + {} partials into {}",
            a.len(),
            b.len(),
            entries.len()
        );
        SparseDeriv { entries }
    }

    /// the same indices, every partial passed through `f`
    pub fn map_values<F>(&self, f: F) -> SparseDeriv
    where
        F: Fn(f64) -> f64,
    {
        SparseDeriv {
            entries: self.entries.iter().map(|&(i, d)| (i, f(d))).collect(),
        }
    }

    /// chain rule for a single-argument function: every partial times `coeff`
    pub fn scaled(&self, coeff: f64) -> SparseDeriv {
        self.map_values(|d| coeff * d)
    }

    pub fn neg(&self) -> SparseDeriv {
        self.map_values(|d| -d)
    }
}

impl From<SparseDeriv> for Vec<(usize, f64)> {
    fn from(deriv: SparseDeriv) -> Self {
        deriv.entries
    }
}

impl fmt::Display for SparseDeriv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (k, (i, d)) in self.entries.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", i, d)?;
        }
        write!(f, "]")
    }
}
