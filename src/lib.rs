//! An [exact cover] solver using Knuth's [dancing links (DLX)] algorithm.
//!
//! [exact cover]: https://en.wikipedia.org/wiki/Exact_cover
//! [dancing links (DLX)]: https://en.wikipedia.org/wiki/Dancing_Links
//!
//! # Concept
//!
//! Many puzzle-like problems — polyomino packing, Sudoku, N-queens, word
//! covers — reduce to exact cover: pick a subset of the rows of a 0/1
//! matrix so that every column has exactly one selected row with a 1 in
//! it. This crate provides an efficient, single-threaded solver for that
//! generic problem over a caller-supplied, opaque row [`Tag`].
//!
//! The core is [`dlx::Matrix`]: a toroidal, quad-linked sparse matrix
//! together with the recursive backtracking search (Algorithm X) that
//! covers and uncovers columns in place. [`problem::Problem`] is a
//! convenience front-end for when subsets are more naturally named than
//! pre-numbered.
//!
//! # Basic example
//!
//! ```
//! use dlx_exact_cover::{Problem, SolutionCollector};
//! use dlx_exact_cover::dlx::Matrix;
//!
//! // Low-level: build rows directly over numeric columns.
//! let mut mat = Matrix::new(0);
//! mat.add_row(b'A' as usize, &[0, 3, 6]);
//! mat.add_row(b'B' as usize, &[0, 3]);
//! mat.add_row(b'C' as usize, &[3, 4, 6]);
//! mat.add_row(b'D' as usize, &[2, 4, 5]);
//! mat.add_row(b'E' as usize, &[1, 2, 5, 6]);
//! mat.add_row(b'F' as usize, &[1, 6]);
//!
//! let mut collector = SolutionCollector::new();
//! mat.search(u64::MAX, collector.sink());
//! assert_eq!(collector.solutions.len(), 1);
//!
//! // Higher-level: name subsets instead of numbering rows.
//! let mut prob = Problem::default();
//! prob.add_exact_constraints(1..=3);
//! prob.add_subset("A", vec![1, 2, 3]);
//! prob.add_subset("B", vec![1]);
//! prob.add_subset("C", vec![2]);
//! prob.add_subset("D", vec![3]);
//! prob.add_subset("E", vec![1, 2]);
//! prob.add_subset("F", vec![2, 3]);
//!
//! let mut solutions = vec![];
//! prob.solve(0, u64::MAX, |sol| solutions.push(sol));
//! assert_eq!(solutions.len(), 4);
//! ```

pub mod dlx;
pub mod problem;

pub use dlx::{Matrix, SolutionCollector, Tag, TAG_MAX};
pub use problem::Problem;
