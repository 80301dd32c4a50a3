use anyhow::{anyhow, bail, Result};
use clap::{crate_version, App, AppSettings, Arg, ArgMatches};
use std::str::FromStr;

use clump::ClumpParams;

pub fn build_cli() -> App<'static, 'static> {
    App::new("clump")
        .version(crate_version!())
        .about("Find clumps of repeated k-mers in genomic sequences")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("INPUT")
                .help("The FASTA/FASTQ file(s) to scan")
                .multiple(true)
                .required(true),
        )
        .arg(
            Arg::with_name("kmer_length")
                .short("k")
                .long("kmer-length")
                .takes_value(true)
                .default_value("9")
                .help("Length of kmers to count"),
        )
        .arg(
            Arg::with_name("window_length")
                .short("w")
                .long("window-length")
                .takes_value(true)
                .default_value("500")
                .help("Length in bases of the sliding window"),
        )
        .arg(
            Arg::with_name("threshold")
                .short("t")
                .long("threshold")
                .takes_value(true)
                .default_value("3")
                .help("Minimum occurrences within one window for a kmer to be reported"),
        )
        .arg(
            Arg::with_name("output_file")
                .short("o")
                .long("output")
                .help("Output a JSON report to this file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("std_out")
                .short("O")
                .long("std-out")
                .help("Output a JSON report to stdout ('print to terminal')")
                .conflicts_with("output_file"),
        )
}

pub fn get_int_arg<T: FromStr>(matches: &ArgMatches, key: &str) -> Result<T> {
    let display_key = key.replace('_', "-");
    matches
        .value_of(key)
        .ok_or_else(|| anyhow!("Bad {}", display_key))?
        .parse::<T>()
        .map_err(|_| anyhow!("{} must be a positive integer", display_key))
}

pub fn parse_clump_options(matches: &ArgMatches) -> Result<ClumpParams> {
    let kmer_length: usize = get_int_arg(matches, "kmer_length")?;
    let window_length: usize = get_int_arg(matches, "window_length")?;
    let threshold: u32 = get_int_arg(matches, "threshold")?;

    if kmer_length == 0 {
        bail!("kmer-length must be at least 1");
    }
    if threshold == 0 {
        bail!("threshold must be at least 1");
    }
    if window_length < kmer_length {
        bail!(
            "window-length ({}) must be at least the kmer-length ({})",
            window_length,
            kmer_length,
        );
    }

    Ok(ClumpParams {
        kmer_length,
        window_length,
        threshold,
    })
}
