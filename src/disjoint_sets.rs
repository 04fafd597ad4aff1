use std::fmt;

use num::PrimInt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisjointSetsError {
    #[error("Universe size must be a non-negative integer, got {n}")]
    InvalidArgument { n: i128 },

    #[error("Index {index} is not in [0, {n})")]
    OutOfRange { index: i128, n: usize },

    #[error("Both elements already belong to the partition rooted at {root}")]
    AlreadyMerged { root: usize },
}

pub type Result<T, E = DisjointSetsError> = std::result::Result<T, E>;

// Saturates, the value only ends up in error payloads.
#[inline]
fn report<I: PrimInt>(x: I) -> i128 {
    x.to_i128().unwrap_or(i128::MAX)
}

/// Partitions of the universe `{0, 1, ..., n-1}`.
///
/// `find` does full path compression, but `merge` is naive: it always attaches the larger root
/// below the smaller one, ignoring ranks and sizes. In exchange, `parents()[i] <= i` holds for
/// every `i` at all times, so the root of a partition is always its minimum element.
///
/// Not thread safe on its own, `find` writes to the parent buffer.
#[derive(Clone, Default, Debug)]
pub struct DisjointSets {
    parents: Vec<usize>,
    k: usize,
}

impl DisjointSets {
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            k: n,
        }
    }

    /// Zero-sized instance, doesn't allocate.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Like `new`, but takes the size from an arbitrary integer, rejecting negative values and
    /// values that don't fit in memory.
    pub fn try_new<N: PrimInt>(n: N) -> Result<Self> {
        let len = match n.to_usize() {
            Some(len) => len,
            None => {
                log::debug!("rejected universe size {}", report(n));
                return Err(DisjointSetsError::InvalidArgument { n: report(n) });
            }
        };

        let mut parents = Vec::new();
        if let Err(err) = parents.try_reserve_exact(len) {
            log::debug!("cannot allocate universe of size {}: {}", len, err);
            return Err(DisjointSetsError::InvalidArgument { n: report(n) });
        }
        parents.extend(0..len);

        Ok(Self { parents, k: len })
    }

    /// Universe size, fixed at construction.
    #[inline]
    pub fn get_n(&self) -> usize {
        self.parents.len()
    }

    /// Current number of partitions.
    #[inline]
    pub fn get_k(&self) -> usize {
        self.k
    }

    /// Read-only view of the parent pointers. The state of compression depends on the history of
    /// `find` calls.
    #[inline]
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }

    fn check_index<I: PrimInt>(&self, x: I) -> Result<usize> {
        match x.to_usize() {
            Some(i) if i < self.get_n() => Ok(i),
            _ => Err(DisjointSetsError::OutOfRange {
                index: report(x),
                n: self.get_n(),
            }),
        }
    }

    /// `x` has to be in range.
    fn find_root(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        while x != root {
            let parent = self.parents[x];
            self.parents[x] = root;
            x = parent;
        }

        root
    }

    /// Returns the root of the partition containing `x` and points every node on the way
    /// directly at it.
    ///
    /// Amortized near O(1), a single call may walk O(n) nodes.
    pub fn find<I: PrimInt>(&mut self, x: I) -> Result<usize> {
        let x = self.check_index(x)?;
        Ok(self.find_root(x))
    }

    /// Merges the partitions containing `x` and `y` and returns the root of the result, which is
    /// the smaller of the two old roots.
    ///
    /// Fails with `AlreadyMerged` when both are in the same partition already.
    pub fn merge<I: PrimInt, J: PrimInt>(&mut self, x: I, y: J) -> Result<usize> {
        // Both checks go first, nothing is written for an out-of-range pair.
        let x = self.check_index(x)?;
        let y = self.check_index(y)?;

        let mut px = self.find_root(x);
        let mut py = self.find_root(y);
        if px == py {
            return Err(DisjointSetsError::AlreadyMerged { root: px });
        }
        if py < px {
            std::mem::swap(&mut px, &mut py);
        }

        self.parents[py] = px;
        self.k -= 1;
        log::trace!("merged root {} into {}, {} partitions left", py, px, self.k);

        Ok(px)
    }

    /// O(1)
    pub fn is_root<I: PrimInt>(&self, x: I) -> Result<bool> {
        let x = self.check_index(x)?;
        Ok(self.parents[x] == x)
    }

    /// Whether `x` and `y` are in the same partition. Compresses both paths.
    pub fn connected<I: PrimInt, J: PrimInt>(&mut self, x: I, y: J) -> Result<bool> {
        let x = self.check_index(x)?;
        let y = self.check_index(y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Roots in ascending order, exactly `get_k()` of them.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter(|&(i, &parent)| i == parent)
            .map(|(i, _)| i)
    }

    /// All partitions with their members in ascending order, sorted by root.
    ///
    /// O(n), compresses every path.
    pub fn partitions(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root = vec![0; self.get_n()];
        let mut partitions: Vec<Vec<usize>> = Vec::with_capacity(self.k);

        for i in 0..self.get_n() {
            // The root is never greater than `i`, so its slot exists by now.
            let root = self.find_root(i);
            if root == i {
                slot_of_root[i] = partitions.len();
                partitions.push(Vec::new());
            }
            partitions[slot_of_root[root]].push(i);
        }

        partitions
    }

    /// Dense labels in `[0, k)`: label `j` goes to the partition with the `j`-th smallest root.
    ///
    /// O(n), compresses every path.
    pub fn labels(&mut self) -> Vec<usize> {
        let mut labels = Vec::with_capacity(self.get_n());
        let mut next_label = 0;

        for i in 0..self.get_n() {
            let root = self.find_root(i);
            if root == i {
                labels.push(next_label);
                next_label += 1;
            } else {
                labels.push(labels[root]);
            }
        }

        labels
    }
}

impl fmt::Display for DisjointSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisjointSets(n={}, k={})", self.get_n(), self.get_k())
    }
}
