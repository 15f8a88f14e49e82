//! Go source emitters for the operator tables.
//!
//! Both emitters write a complete map literal to the supplied writer,
//! one output line per table entry plus fixed framing lines. The text is
//! meant to be pasted into a Go codebase as-is.

use std::collections::BTreeSet;
use std::io::Write;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::annex_a;
use crate::error::Result;
use crate::gfx_ops::{self, GfxOp};
use crate::summary;

/// Emit the marking-operator map for the Annex A summary table.
///
/// Output, in order: a `{count} lines` line, the map literal header,
/// one `` `op`: false, `` line per row annotated with the zero-based row
/// index and the row's description text, and the closing brace. Row
/// order equals table order.
pub fn emit_marking_operators<W: Write>(out: &mut W) -> Result<()> {
    emit_marking(out, annex_a::ROWS)
}

fn emit_marking<W: Write>(out: &mut W, rows: &[&str]) -> Result<()> {
    writeln!(out, "{} lines", rows.len())?;
    writeln!(out, "var markingOperators = map[string]bool{{")?;
    for (i, line) in rows.iter().enumerate() {
        let row = summary::split_row(line)?;
        writeln!(out, "\t`{}`: false,  // {:>3}: {}", row.name, i, row.text)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Emit the valid-operation map for the interpreter dispatch table.
///
/// Operators are sorted by `(lowercase(name), name)` so that the two
/// case variants of a mnemonic sit next to each other, upper case
/// first. Variadic operators map to `nil`; all others to a
/// `[]PdfObjectType{...}` literal. A trailing comment lists the operand
/// kind names the table uses.
pub fn emit_operation_specs<W: Write>(out: &mut W) -> Result<()> {
    let mut ops = gfx_ops::parse_table()?;
    ops.sort_by_key(|op| (op.name.to_lowercase(), op.name.clone()));

    writeln!(out, "var allValidOperations = map[string] operationSpec {{")?;
    for op in &ops {
        writeln!(
            out,
            "\t{}: {}, // {}",
            go_quote(&op.name),
            operand_literal(op),
            split_camel(&op.handler)
        )?;
    }
    writeln!(out, "}}")?;

    let kinds: BTreeSet<_> = ops.iter().flat_map(|op| op.operands.iter().copied()).collect();
    writeln!(
        out,
        "// operand kinds: {}",
        kinds.iter().map(|kind| kind.go_name()).join(", ")
    )?;
    Ok(())
}

fn operand_literal(op: &GfxOp) -> String {
    if op.is_variadic() {
        "nil".to_string()
    } else {
        format!(
            "[]PdfObjectType{{{}}}",
            op.operands.iter().map(|kind| kind.go_name()).join(", ")
        )
    }
}

/// Quote an operator name as a Go interpreted string literal.
fn go_quote(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

static CAMEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap());

/// Space out interior camel-case boundaries ("BeginText" -> "Begin Text").
fn split_camel(name: &str) -> String {
    CAMEL_RE.replace_all(name, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_go_metacharacters() {
        assert_eq!(go_quote("BT"), "\"BT\"");
        assert_eq!(go_quote("'"), "\"'\"");
        assert_eq!(go_quote("\""), "\"\\\"\"");
    }

    #[test]
    fn splits_camel_case_words() {
        assert_eq!(split_camel("BeginText"), "Begin Text");
        assert_eq!(split_camel("SetStrokeColorSpace"), "Set StrokeColor Space");
        assert_eq!(split_camel("Fill"), "Fill");
    }
}
