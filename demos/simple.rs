//! Knuth's textbook exact-cover example (TAOCP 7.2.2.1), run twice: once
//! against the low-level `Matrix` API directly, once through `Problem`.

use dlx_exact_cover::dlx::Matrix;
use dlx_exact_cover::{Problem, SolutionCollector};

fn main() {
    env_logger::init();

    // Low-level: seven 0-based columns, six rows tagged 'A'..'F'.
    let mut mat = Matrix::new(1);
    mat.add_row(b'A' as usize, &[0, 3, 6]);
    mat.add_row(b'B' as usize, &[0, 3]);
    mat.add_row(b'C' as usize, &[3, 4, 6]);
    mat.add_row(b'D' as usize, &[2, 4, 5]);
    mat.add_row(b'E' as usize, &[1, 2, 5, 6]);
    mat.add_row(b'F' as usize, &[1, 6]);

    let mut collector = SolutionCollector::new();
    mat.search(u64::MAX, collector.sink());
    println!("low-level solutions: {:?}", collector.solutions);

    // High-level: name the subsets, let Problem number the columns.
    let mut prob = Problem::default();
    prob.add_exact_constraints(1..=7);
    prob.add_subset("A", vec![3, 5, 6]);
    prob.add_subset("B", vec![1, 4, 7]);
    prob.add_subset("C", vec![2, 3, 6]);
    prob.add_subset("D", vec![1, 4]);
    prob.add_subset("E", vec![2, 7]);
    prob.add_subset("F", vec![4, 5, 7]);

    let mut solutions = vec![];
    prob.solve(1, u64::MAX, |sol| solutions.push(sol));
    println!("named solutions: {:?}", solutions);
}
