//! A low-level API for the dancing links (DLX) exact-cover solver.
//!
//! If you are looking for a [`Problem`](crate::problem::Problem) builder
//! API that does not require hand-assigning column indices, see the
//! [`problem`](crate::problem) module.

pub mod callback;
pub mod matrix;

pub use callback::SolutionCollector;
pub use matrix::{Matrix, Tag, TAG_MAX};
