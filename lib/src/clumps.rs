use std::collections::{HashMap, HashSet, VecDeque};

use crate::kmers::kmer_windows;

/// Multiset of the k-mer occurrences inside the trailing window of a scan.
///
/// Occurrences are evicted in FIFO order as the window advances, so `push`
/// must receive the k-mers in sequence order. Every k-mer whose in-window
/// count reaches the threshold is recorded and stays recorded even after
/// the window slides past it.
#[derive(Clone, Debug)]
pub struct ClumpCounter {
    order: VecDeque<Vec<u8>>,
    counts: HashMap<Vec<u8>, u32>,
    clumps: HashSet<Vec<u8>>,
    limit: usize,
    threshold: u32,
}

impl ClumpCounter {
    /// `limit` is the window length in k-mer positions minus one, i.e.
    /// `window_length - kmer_length` for a window of `window_length` bases.
    pub fn new(limit: usize, threshold: u32) -> Self {
        ClumpCounter {
            order: VecDeque::with_capacity(limit + 2),
            counts: HashMap::with_capacity(limit + 2),
            clumps: HashSet::new(),
            limit,
            threshold,
        }
    }

    /// Admit the next k-mer occurrence of the scan.
    ///
    /// Eviction fires once the queue already holds `limit + 1` occurrences;
    /// the evicted k-mer's count is decremented but its map entry is left
    /// in place at zero, to be re-incremented if the k-mer comes around
    /// again.
    pub fn push(&mut self, kmer: &[u8]) {
        if self.order.len() > self.limit {
            if let Some(oldest) = self.order.pop_front() {
                if let Some(count) = self.counts.get_mut(&oldest) {
                    *count -= 1;
                }
            }
        }

        self.order.push_back(kmer.to_vec());
        let count = self.counts.entry(kmer.to_vec()).or_insert(0);
        *count += 1;
        // counts only ever move by one, so the first time a k-mer has
        // `threshold` copies in the window the two are exactly equal
        if *count == self.threshold {
            self.clumps.insert(kmer.to_vec());
        }
    }

    pub fn into_clumps(self) -> HashSet<Vec<u8>> {
        self.clumps
    }
}

/// Collect all k-mers of `seq` that occur at least `threshold` times among
/// the k-mers of some window of `window_length` bases.
///
/// A window shorter than the k-mer length can never contain a whole k-mer,
/// so that case returns the empty set.
pub fn find_clumps(
    seq: &[u8],
    kmer_length: usize,
    window_length: usize,
    threshold: u32,
) -> HashSet<Vec<u8>> {
    if kmer_length == 0 || window_length < kmer_length {
        return HashSet::new();
    }

    let mut counter = ClumpCounter::new(window_length - kmer_length, threshold);
    for kmer in kmer_windows(seq, kmer_length) {
        counter.push(kmer);
    }
    counter.into_clumps()
}
