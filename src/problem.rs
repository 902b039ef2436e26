//! A generic problem type that defines constraints and subsets, and
//! compiles them into a [`Matrix`](crate::dlx::Matrix) through the
//! add-row contract the core exposes.
//!
//! This is a front-end, not part of the core: `Matrix` never knows a
//! `Problem` exists. Every complex exact-cover problem (polyomino
//! packing, Sudoku, the word-cover puzzle in `demos/wordle_cover.rs`)
//! can compile its own rows directly against `Matrix::add_row`; `Problem`
//! exists for the common case where subsets are best named rather than
//! pre-numbered.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::dlx::{Matrix, Tag};

/// Base trait for subset names and set elements.
pub trait Value: Clone + Hash + Eq {}
impl<T: Clone + Hash + Eq> Value for T {}

/// An exact-cover problem instance.
///
/// The set elements are of type `E`; they form the matrix's columns.
/// The subsets are identified by names of type `N`; they form the
/// matrix's rows.
///
/// # Ordering
///
/// The order of the subsets and the elements is determined by insertion
/// order (backed by [`IndexMap`]/[`IndexSet`]), so the solution order
/// out of [`Problem::solve`] is reproducible across runs for a fixed
/// construction sequence.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug))]
pub struct Problem<N: Value, E: Value> {
    constraints: IndexSet<E>,
    subsets: IndexMap<N, Vec<E>>,
}

impl<N: Value, E: Value> Problem<N, E> {
    /// Returns a reference to the problem's constraints (elements).
    pub fn constraints(&self) -> &IndexSet<E> {
        &self.constraints
    }

    /// Returns a reference to the problem's named subsets.
    pub fn subsets(&self) -> &IndexMap<N, Vec<E>> {
        &self.subsets
    }

    /// Adds a subset to the problem.
    ///
    /// If the subset name already exists, it replaces the corresponding
    /// subset.
    pub fn add_subset(&mut self, name: N, subset: Vec<E>) {
        self.subsets.insert(name, subset);
    }

    /// Adds a constraint that has to be covered by exactly one subset.
    pub fn add_exact_constraint(&mut self, elem: E) {
        self.constraints.insert(elem);
    }

    /// Adds several exact constraints.
    pub fn add_exact_constraints<I: IntoIterator<Item = E>>(&mut self, constraints: I) {
        for constraint in constraints {
            self.add_exact_constraint(constraint);
        }
    }

    /// Compiles the problem into a [`Matrix`], assigning each subset a
    /// [`Tag`] equal to its insertion index.
    ///
    /// Column indices within a row are sorted before the row is added,
    /// since `Matrix::add_row` requires a strictly increasing column
    /// list but a subset's elements may have been given in any order.
    pub fn build_matrix(&self, verbosity: u32) -> Matrix {
        let mut mat = Matrix::new(verbosity);
        for (tag, subset) in self.subsets.values().enumerate() {
            let mut cols: Vec<usize> = subset
                .iter()
                .map(|e| {
                    self.constraints
                        .get_index_of(e)
                        .expect("subset references a constraint that was never added")
                })
                .collect();
            cols.sort_unstable();
            cols.dedup();
            mat.add_row(tag as Tag, &cols);
        }
        mat
    }

    /// Builds the matrix and searches it, reporting at most `max`
    /// solutions as lists of subset names.
    pub fn solve<F>(&self, verbosity: u32, max: u64, mut on_solution: F) -> u64
    where
        F: FnMut(Vec<&N>),
    {
        let mut mat = self.build_matrix(verbosity);
        let names: Vec<&N> = self.subsets.keys().collect();
        mat.search(max, |_index, tags, _depth| {
            on_solution(tags.iter().map(|&tag| names[tag]).collect());
        })
    }
}
