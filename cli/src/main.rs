use std::fs::File;
use std::io::{stdout, Write};

use anyhow::{anyhow, Context, Result};

use crate::cli::parse_clump_options;
use clump::{format_err, scan_files};

mod cli;

fn output_to<F>(output_fn: F, output: Option<&str>, extension: &str) -> Result<()>
where
    F: Fn(&mut dyn Write) -> Result<()>,
{
    match output {
        None => {
            let mut out = stdout();
            output_fn(&mut out)?;
        }
        Some(o) => {
            // if the filename doesn't have the right extension
            // add it on
            let filename = String::from(o);
            let out_filename = if filename.ends_with(extension) {
                filename
            } else {
                filename + extension
            };

            let mut out = File::create(&out_filename)
                .context(format!("unable to create '{}'", out_filename))?;
            output_fn(&mut out)?;
        }
    };
    Ok(())
}

fn run() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let filenames: Vec<_> = matches
        .values_of("INPUT")
        .ok_or_else(|| format_err!("Bad INPUT"))?
        .collect();
    let params = parse_clump_options(&matches)?;

    let reports = scan_files(&filenames, &params)?;

    if matches.is_present("output_file") || matches.is_present("std_out") {
        output_to(
            |writer| {
                serde_json::to_writer(writer, &reports)
                    .map_err(|_| anyhow!("Could not serialize JSON to file"))?;
                Ok(())
            },
            matches.value_of("output_file"),
            ".json",
        )?;
    } else {
        for report in &reports {
            println!(
                "({}, {})-clumps of {}-mers found in {}: {}",
                report.window_length,
                report.threshold,
                report.kmer_length,
                report.name,
                report.len(),
            );
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}
