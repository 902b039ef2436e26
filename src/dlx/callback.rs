//! Convenience sinks for [`Matrix::search`](super::matrix::Matrix::search).

use super::matrix::Tag;

/// Collects every reported solution into an owned `Vec`.
///
/// `Matrix::search` reports solutions through a caller-supplied closure
/// so it never has to allocate on the caller's behalf; this type adapts
/// that closure-based sink into a plain `Vec` for callers who would
/// rather collect everything up front and inspect it afterward.
#[derive(Default)]
pub struct SolutionCollector {
    pub solutions: Vec<Vec<Tag>>,
}

impl SolutionCollector {
    pub fn new() -> SolutionCollector {
        SolutionCollector::default()
    }

    /// Returns a sink closure that appends each reported solution.
    pub fn sink(&mut self) -> impl FnMut(u64, &[Tag], usize) + '_ {
        move |_index, tags, _depth| self.solutions.push(tags.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::super::matrix::Matrix;
    use super::*;

    #[test]
    fn collector_gathers_every_solution() {
        let mut mat = Matrix::new(0);
        mat.add_row(1, &[0, 1, 2]);
        mat.add_row(2, &[0, 1, 2]);

        let mut collector = SolutionCollector::new();
        mat.search(u64::MAX, collector.sink());
        assert_eq!(collector.solutions.len(), 2);
    }
}
