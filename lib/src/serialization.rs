use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ClumpParams;

/// Result of scanning one input: the parameters used and the clump k-mers
/// found, sorted so that serialized output is deterministic.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClumpReport {
    pub name: String,
    pub seq_length: u64,
    pub num_kmers: u64,
    pub kmer_length: usize,
    pub window_length: usize,
    pub threshold: u32,
    pub clumps: Vec<String>,
}

impl ClumpReport {
    pub fn new(
        name: &str,
        seq_length: u64,
        num_kmers: u64,
        params: &ClumpParams,
        clumps: HashSet<Vec<u8>>,
    ) -> Self {
        let mut clumps: Vec<String> = clumps
            .into_iter()
            .map(|kmer| String::from_utf8_lossy(&kmer).into_owned())
            .collect();
        clumps.sort();

        ClumpReport {
            name: String::from(name),
            seq_length,
            num_kmers,
            kmer_length: params.kmer_length,
            window_length: params.window_length,
            threshold: params.threshold,
            clumps,
        }
    }

    pub fn len(&self) -> usize {
        self.clumps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clumps.is_empty()
    }
}
