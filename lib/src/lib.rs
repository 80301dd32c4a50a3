use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use needletail::parse_fastx_reader;
use needletail::Sequence;
use rayon::prelude::*;

pub mod clumps;
pub mod errors;
pub mod kmers;
pub mod serialization;

use crate::clumps::find_clumps;
use crate::errors::ClumpResult;
use crate::kmers::kmer_windows;
use crate::serialization::ClumpReport;

/// Scan parameters: the k-mer length, the window length in bases, and the
/// minimum in-window occurrence count for a k-mer to count as a clump.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClumpParams {
    pub kmer_length: usize,
    pub window_length: usize,
    pub threshold: u32,
}

impl Default for ClumpParams {
    fn default() -> Self {
        ClumpParams {
            kmer_length: 9,
            window_length: 500,
            threshold: 3,
        }
    }
}

/// Scan each file for clumps, in parallel across files.
///
/// Reports come back in the same order as `filenames`.
pub fn scan_files(filenames: &[&str], params: &ClumpParams) -> ClumpResult<Vec<ClumpReport>> {
    filenames
        .par_iter()
        .map(|filename| {
            let reader: Box<dyn Read + Send> = Box::new(File::open(Path::new(filename))?);
            scan_stream(reader, filename, params)
        })
        .collect()
}

/// Scan one FASTA/FASTQ stream for clumps.
///
/// Each record is scanned with its own counter (windows never span record
/// boundaries); the report's clump set is the union over the records.
pub fn scan_stream<'a>(
    reader: Box<dyn Read + Send + 'a>,
    name: &str,
    params: &ClumpParams,
) -> ClumpResult<ClumpReport> {
    let mut fastx_reader = parse_fastx_reader(reader)?;
    let mut seq_length = 0u64;
    let mut num_kmers = 0u64;
    let mut clumps: HashSet<Vec<u8>> = HashSet::new();

    while let Some(record) = fastx_reader.next() {
        let seqrec = record?;
        let seq = seqrec.normalize(false);
        seq_length += seq.len() as u64;
        num_kmers += kmer_windows(&seq, params.kmer_length).len() as u64;
        clumps.extend(find_clumps(
            &seq,
            params.kmer_length,
            params.window_length,
            params.threshold,
        ));
    }

    Ok(ClumpReport::new(name, seq_length, num_kmers, params, clumps))
}
