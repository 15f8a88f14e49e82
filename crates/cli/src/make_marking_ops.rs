//! make-marking-ops - Generate the Go marking-operator map.
//!
//! A command line tool that prints a `map[string]bool` literal covering
//! every operator in the PDF 32000-1:2008 Annex A summary table, for
//! pasting into a Go codebase. Every value starts out `false`; the
//! marking classification is filled in by hand on the Go side.

use clap::{ArgAction, Parser, ValueEnum};
use opgen_core::{annex_a, codegen, summary};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Output type for the generated table.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Go map literal (default)
    #[default]
    Go,
    /// Parsed rows as a JSON array
    Json,
}

/// A command line tool for generating the Go marking-operator map.
#[derive(Parser, Debug)]
#[command(name = "make-marking-ops")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output_type", value_enum, default_value = "go")]
    output_type: OutputType,
}

/// One parsed summary row, as serialized in JSON output.
#[derive(Debug, Serialize)]
struct RowRecord<'a> {
    index: usize,
    name: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}

fn emit_json<W: Write>(out: &mut W) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut records = Vec::with_capacity(annex_a::ROWS.len());
    for (index, line) in annex_a::ROWS.iter().enumerate() {
        let row = summary::split_row(line)?;
        records.push(RowRecord {
            index,
            name: row.name,
            text: row.text,
            page: row.page,
        });
    }
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.debug {
        eprintln!("{} table rows", annex_a::ROWS.len());
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    match args.output_type {
        OutputType::Go => codegen::emit_marking_operators(&mut output)?,
        OutputType::Json => emit_json(&mut output)?,
    }

    output.flush()?;
    Ok(())
}
