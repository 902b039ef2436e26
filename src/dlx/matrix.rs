//! The toroidal quad-linked sparse matrix and the Algorithm X search over it.
//!
//! This is a from-scratch dancing-links mesh, not the simplified
//! `row: usize` bookkeeping used elsewhere in this crate's history: every
//! node carries the caller's own [`Tag`], the column population lives in
//! the header's `value` slot, and row allocation is threaded through the
//! root sentinel's vertical links exactly as in the reference C
//! implementation this module is ported from.

use log::{debug, log_enabled, trace, Level};

/// An opaque, pointer-sized value attached to a row.
///
/// The matrix never interprets a tag; it is handed back verbatim in
/// solutions. Callers that need a richer payload than a bare integer
/// typically use a tag as an index into their own side table.
pub type Tag = usize;

/// The largest value a [`Tag`] can hold.
pub const TAG_MAX: Tag = usize::MAX;

#[derive(Clone, Copy, Debug, Default)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    /// Owning column header, for row-nodes only. Unused on the root,
    /// column headers, and row anchors.
    header: usize,
    /// Live row-count for column headers; the row's [`Tag`] for
    /// row-nodes; unused on the root and row anchors.
    value: usize,
}

impl Node {
    fn self_loop() -> Node {
        Node { left: 0, right: 0, up: 0, down: 0, header: 0, value: 0 }
    }
}

/// A sparse 0/1 matrix of constraints (columns) and tagged rows, solved
/// by Knuth's dancing-links algorithm (Algorithm X).
///
/// Nodes live in a single arena (`pool`), addressed by dense indices
/// rather than pointers; index `0` is always the root sentinel. Column
/// headers are allocated densely as rows reference them, and a row's
/// nodes are always a contiguous block in the arena — the anchor at the
/// block's first index, followed by one row-node per referenced column.
pub struct Matrix {
    pool: Vec<Node>,
    /// Dense column index -> header's pool index. Grows monotonically;
    /// never shrinks until `reset`/`free`.
    col_index: Vec<usize>,
    row_cnt: usize,
    node_cnt: usize,
    verbosity: u32,
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::new(0)
    }
}

impl Matrix {
    const ROOT: usize = 0;

    /// Creates an empty matrix, recording `verbosity` for diagnostics.
    pub fn new(verbosity: u32) -> Matrix {
        Matrix {
            pool: vec![Node::self_loop()],
            col_index: Vec::new(),
            row_cnt: 0,
            node_cnt: 0,
            verbosity,
        }
    }

    /// Returns the matrix to an empty state and records a new verbosity.
    ///
    /// Equivalent to the original library's `init_matrix`: releases any
    /// prior rows and columns, then installs a fresh root sentinel.
    pub fn reset(&mut self, verbosity: u32) {
        self.free();
        self.verbosity = verbosity;
    }

    /// Releases all storage, returning the matrix to its just-constructed
    /// state. Idempotent.
    pub fn free(&mut self) {
        self.pool.clear();
        self.pool.push(Node::self_loop());
        self.col_index.clear();
        self.row_cnt = 0;
        self.node_cnt = 0;
    }

    pub fn row_count(&self) -> usize {
        self.row_cnt
    }

    pub fn column_count(&self) -> usize {
        self.col_index.len()
    }

    /// Appends a row carrying `tag`, covering exactly the given columns.
    ///
    /// `columns` must be strictly increasing; violating that is a
    /// programming error and panics, matching the reference
    /// implementation's `abort()` on a non-monotonic column list (this
    /// contract is what lets callers skip an interior sort). An empty
    /// `columns` is a no-op. Any column index referenced here that does
    /// not exist yet is created, appended to the end of the live column
    /// list in index order.
    pub fn add_row(&mut self, tag: Tag, columns: &[usize]) {
        if columns.is_empty() {
            return;
        }

        if self.verbosity >= 3 && log_enabled!(Level::Trace) {
            trace!("==[{}]: {:?}", self.row_cnt, columns);
        }

        let mut prev: Option<usize> = None;
        for &col in columns {
            assert!(
                prev.map_or(true, |p| col > p),
                "add_row: non-monotonic column list ({:?})",
                columns
            );
            prev = Some(col);
        }
        self.ensure_columns(columns[columns.len() - 1] + 1);

        // The anchor and its row-nodes form one contiguous arena block.
        let anchor = self.pool.len();
        self.pool.push(Node::self_loop());
        self.thread_row_alloc(anchor);

        let mut last = anchor;
        for &col in columns {
            let header = self.col_index[col];
            let node = self.pool.len();
            self.pool.push(Node { header, value: tag, ..Node::self_loop() });

            // Insert at the tail of the column's vertical list.
            let tail = self.pool[header].up;
            self.pool[node].up = tail;
            self.pool[node].down = header;
            self.pool[tail].down = node;
            self.pool[header].up = node;
            self.pool[header].value += 1;

            // Insert to the right of `last` in the row's horizontal list.
            let after_last = self.pool[last].right;
            self.pool[node].left = last;
            self.pool[node].right = after_last;
            self.pool[after_last].left = node;
            self.pool[last].right = node;

            last = node;
        }
        // Close the row's horizontal circle over its real nodes only —
        // the anchor is never part of this cycle, just a pointer to its
        // first element.
        let first = self.pool[anchor].right;
        self.pool[last].right = first;
        self.pool[first].left = last;

        self.row_cnt += 1;
        self.node_cnt += columns.len();
    }

    fn thread_row_alloc(&mut self, anchor: usize) {
        let first_row = self.pool[Matrix::ROOT].down;
        self.pool[anchor].down = first_row;
        self.pool[first_row].up = anchor;
        self.pool[anchor].up = Matrix::ROOT;
        self.pool[Matrix::ROOT].down = anchor;
    }

    fn ensure_columns(&mut self, cols_needed: usize) {
        while self.col_index.len() < cols_needed {
            let header = self.pool.len();
            self.pool.push(Node::self_loop());

            let tail = self.pool[Matrix::ROOT].left;
            self.pool[header].left = tail;
            self.pool[header].right = Matrix::ROOT;
            self.pool[tail].right = header;
            self.pool[Matrix::ROOT].left = header;

            self.col_index.push(header);
        }
    }

    // === Cover / Uncover ===================================================

    /// Hides a live column and every row that intersects it.
    ///
    /// Exact inverse of [`Matrix::uncover`]; see that method for the
    /// reasoning behind the reversed traversal directions.
    fn cover(&mut self, c: usize) {
        let (l, r) = (self.pool[c].left, self.pool[c].right);
        self.pool[l].right = r;
        self.pool[r].left = l;

        let mut i = self.pool[c].down;
        while i != c {
            let mut j = self.pool[i].right;
            while j != i {
                let (u, d, h) = (self.pool[j].up, self.pool[j].down, self.pool[j].header);
                self.pool[u].down = d;
                self.pool[d].up = u;
                self.pool[h].value -= 1;
                j = self.pool[j].right;
            }
            i = self.pool[i].down;
        }
    }

    /// Restores a column and its rows, undoing [`Matrix::cover`].
    ///
    /// Traverses top-to-bottom/left-to-right in `cover` and
    /// bottom-to-top/right-to-left here; reversing both is what lets the
    /// still-intact `up`/`down` pointers on a removed node do the work of
    /// relinking it — the Dancing Links property.
    fn uncover(&mut self, c: usize) {
        let mut i = self.pool[c].up;
        while i != c {
            let mut j = self.pool[i].left;
            while j != i {
                let (u, d, h) = (self.pool[j].up, self.pool[j].down, self.pool[j].header);
                self.pool[u].down = j;
                self.pool[d].up = j;
                self.pool[h].value += 1;
                j = self.pool[j].left;
            }
            i = self.pool[i].up;
        }

        let (l, r) = (self.pool[c].left, self.pool[c].right);
        self.pool[l].right = c;
        self.pool[r].left = c;
    }

    // === Search (Algorithm X) ==============================================

    /// Enumerates exact covers, reporting each through `sink`.
    ///
    /// Stops as soon as `max` solutions have been reported (`max == 0`
    /// reports none without touching the matrix) and returns the number
    /// of solutions reported. `sink(solution_index, tags, depth)` is
    /// called once per solution; `tags` is only valid for the duration
    /// of that call.
    pub fn search<F>(&mut self, max: u64, mut sink: F) -> u64
    where
        F: FnMut(u64, &[Tag], usize),
    {
        if max == 0 {
            return 0;
        }

        if self.verbosity >= 1 && log_enabled!(Level::Debug) {
            debug!(
                "cover matrix: {} cols {} rows {} nodes",
                self.col_index.len(),
                self.row_cnt,
                self.node_cnt
            );
            let counts: Vec<usize> =
                self.col_index.iter().map(|&h| self.pool[h].value).collect();
            debug!("column counts: {:?}", counts);
        }

        let mut o = vec![0 as Tag; self.row_cnt];
        self.search_rec(&mut o, 0, 0, max, &mut sink)
    }

    fn search_rec(
        &mut self,
        o: &mut [Tag],
        depth: usize,
        pos: u64,
        max: u64,
        sink: &mut dyn FnMut(u64, &[Tag], usize),
    ) -> u64 {
        let root = Matrix::ROOT;
        if self.pool[root].right == root {
            sink(pos, &o[..depth], depth);
            return 1;
        }

        // S-heuristic: branch on the live column with fewest candidate
        // rows. Ties keep the first one encountered.
        let mut col = self.pool[root].right;
        let mut best = self.pool[col].value;
        let mut c = self.pool[col].right;
        while c != root {
            if self.pool[c].value < best {
                best = self.pool[c].value;
                col = c;
            }
            c = self.pool[c].right;
        }

        self.cover(col);

        let mut sol_count: u64 = 0;
        let mut r = self.pool[col].down;
        while r != col && pos + sol_count < max {
            o[depth] = self.pool[r].value;

            let mut j = self.pool[r].right;
            while j != r {
                self.cover(self.pool[j].header);
                j = self.pool[j].right;
            }

            sol_count += self.search_rec(o, depth + 1, pos + sol_count, max, sink);

            let mut j = self.pool[r].left;
            while j != r {
                self.uncover(self.pool[j].header);
                j = self.pool[j].left;
            }

            r = self.pool[r].down;
        }

        self.uncover(col);
        sol_count
    }
}
