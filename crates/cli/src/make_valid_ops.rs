//! make-valid-ops - Generate the Go valid-operation map.
//!
//! A command line tool that prints a `map[string] operationSpec` literal
//! mapping every operator of the xpdf `Gfx` dispatch table to its
//! operand type list, for pasting into a Go codebase.

use clap::{ArgAction, Parser};
use opgen_core::{codegen, gfx_ops};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// A command line tool for generating the Go valid-operation map.
#[derive(Parser, Debug)]
#[command(name = "make-valid-ops")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.debug {
        let ops = gfx_ops::parse_table()?;
        eprintln!("{} dispatch entries", ops.len());
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    codegen::emit_operation_specs(&mut output)?;
    output.flush()?;
    Ok(())
}
