//! Disjoint five-letter-word cover (spec scenario S5): find sets of five
//! words, plus one synthetic single-letter row, that together partition
//! the alphabet.
//!
//! Mirrors the row-encoding contract of the `wordle_cover.c` program
//! this crate's spec was distilled from: 26 letter columns (a-z) plus a
//! marker column 26, one row per five-letter word with distinct letters
//! (columns = sorted letter indices), and 26 synthetic single-letter
//! rows each adding `{letter, 26}` so a solution leaves at most one
//! letter to the synthetic rows — without the marker column, the solver
//! would instead report the "solution" of 26 single letters and nothing
//! else.
//!
//! Pass a word-list file as the first argument (one word per line,
//! non-five-letter lines are skipped); with no argument, a small
//! embedded word list is used so the demo runs standalone.

use std::env;
use std::fs;

use dlx_exact_cover::dlx::{Matrix, Tag};

const MARKER_COLUMN: usize = 26;

/// Used when no word-list file is given on the command line.
const BUILTIN_WORDS: &[&str] = &["glent", "shard", "bumpy", "cozie", "fjork"];

/// Encodes a word as its sorted, deduplicated letter columns, or `None`
/// if it isn't all-lowercase or repeats a letter (a word with a
/// repeated letter can never be part of a disjoint cover by itself).
fn encode(word: &str) -> Option<Vec<usize>> {
    let mut bits: u32 = 0;
    for c in word.chars() {
        if !c.is_ascii_lowercase() {
            return None;
        }
        let bit = 1u32 << (c as u32 - 'a' as u32);
        if bits & bit != 0 {
            return None;
        }
        bits |= bit;
    }
    Some((0..26).filter(|&i| bits & (1 << i) != 0).collect())
}

fn main() {
    env_logger::init();

    let words: Vec<String> = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("can't read {}: {}", path, e))
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| line.len() == 5)
            .collect(),
        None => BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
    };

    let mut mat = Matrix::new(1);
    let mut tagged_words: Vec<String> = vec![];

    for word in words {
        if let Some(cols) = encode(&word) {
            // Tags start at 1; 0 is reserved for "row present, no
            // payload" on the synthetic single-letter rows below.
            let tag = (tagged_words.len() + 1) as Tag;
            tagged_words.push(word);
            mat.add_row(tag, &cols);
        }
    }

    for letter in 0..26usize {
        mat.add_row(0, &[letter, MARKER_COLUMN]);
    }

    let mut total = 0u64;
    mat.search(u64::MAX, |index, tags, _depth| {
        total += 1;
        print!("{}:", index);
        for &tag in tags {
            if tag != 0 {
                print!(" {}", tagged_words[tag - 1]);
            }
        }
        println!();
    });

    eprintln!("{} solutions found", total);
}
