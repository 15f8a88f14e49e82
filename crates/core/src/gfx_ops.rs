//! Operator dispatch table from the xpdf `Gfx` interpreter.
//!
//! The excerpt below is the C initializer list for the interpreter's
//! operator table: each entry carries the operator, the declared operand
//! count (negative for variadic operators), the operand type checks, and
//! the handler method. The entry grammar is rigid C initializer syntax,
//! so a single anchored regex per entry is the parsing tool of choice
//! here, with the count and type list validated after capture.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{OpgenError, Result};

/// One entry of the dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfxOp {
    /// Operator mnemonic, with C string escapes decoded.
    pub name: String,
    /// Declared operand count; negative means "up to `abs(count)`".
    pub count: i32,
    /// Type checks for the operands, in order.
    pub operands: Vec<OperandKind>,
    /// Handler method name with the `op` prefix stripped.
    pub handler: String,
}

impl GfxOp {
    /// Variadic operators take a variable number of operands and map to
    /// `nil` in the generated Go table.
    pub fn is_variadic(&self) -> bool {
        self.count < 0
    }
}

/// Operand type checks, named after the Go-side `PdfObjectType`
/// constants they generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperandKind {
    Array,
    Integer,
    Name,
    NameDict,
    NameNumber,
    Number,
    String,
}

impl OperandKind {
    /// Decode an xpdf `tchk` token. `tchkNone` marks an empty operand
    /// list rather than a kind of its own, so it decodes to `None`.
    fn from_tchk(token: &str) -> Result<Option<OperandKind>> {
        match token {
            "tchkArray" => Ok(Some(OperandKind::Array)),
            "tchkInt" => Ok(Some(OperandKind::Integer)),
            "tchkName" => Ok(Some(OperandKind::Name)),
            "tchkProps" => Ok(Some(OperandKind::NameDict)),
            "tchkSCN" => Ok(Some(OperandKind::NameNumber)),
            "tchkNum" => Ok(Some(OperandKind::Number)),
            "tchkString" => Ok(Some(OperandKind::String)),
            "tchkNone" => Ok(None),
            other => Err(OpgenError::UnknownOperandType(other.to_string())),
        }
    }

    /// Go-side constant name.
    pub fn go_name(self) -> &'static str {
        match self {
            OperandKind::Array => "pdfTypeArray",
            OperandKind::Integer => "pdfTypeInteger",
            OperandKind::Name => "pdfTypeName",
            OperandKind::NameDict => "pdfTypeNameDict",
            OperandKind::NameNumber => "pdfTypeNameNumber",
            OperandKind::Number => "pdfTypeNumber",
            OperandKind::String => "pdfTypeString",
        }
    }
}

static ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{\s*"(.{0,4})",\s*(-?\d+),\s*\{([\w\s,]+)\},\s*&Gfx::(\w+)\},"#).unwrap()
});

/// Parse the embedded dispatch table.
pub fn parse_table() -> Result<Vec<GfxOp>> {
    parse_entries(GFX_OP_TAB)
}

/// Parse dispatch-table entries out of a C initializer excerpt.
pub fn parse_entries(text: &str) -> Result<Vec<GfxOp>> {
    let mut ops = Vec::new();
    for caps in ENTRY_RE.captures_iter(text) {
        let name = unescape_c(&caps[1]);
        let count: i32 = caps[2].parse().map_err(|_| OpgenError::InvalidCount {
            op: name.clone(),
            value: caps[2].to_string(),
        })?;

        let mut operands = Vec::new();
        for token in caps[3].split(',') {
            if let Some(kind) = OperandKind::from_tchk(token.trim())? {
                operands.push(kind);
            }
        }

        if count.unsigned_abs() as usize != operands.len() {
            return Err(OpgenError::OperandCountMismatch {
                op: name,
                declared: count,
                listed: operands.len(),
            });
        }

        let handler = caps[4].strip_prefix("op").unwrap_or(&caps[4]).to_string();
        ops.push(GfxOp {
            name,
            count,
            operands,
            handler,
        });
    }
    Ok(ops)
}

/// Decode the C string escapes that occur in operator names (`\"`, `\\`).
fn unescape_c(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Operator table of the xpdf `Gfx` interpreter, as it reads in the C
/// source.
const GFX_OP_TAB: &str = r#"
  {"\"",  3, {tchkNum,    tchkNum,    tchkString},
          &Gfx::opMoveSetShowText},
  {"'",   1, {tchkString},
          &Gfx::opMoveShowText},
  {"B",   0, {tchkNone},
          &Gfx::opFillStroke},
  {"B*",  0, {tchkNone},
          &Gfx::opEOFillStroke},
  {"BDC", 2, {tchkName,   tchkProps},
          &Gfx::opBeginMarkedContent},
  {"BI",  0, {tchkNone},
          &Gfx::opBeginImage},
  {"BMC", 1, {tchkName},
          &Gfx::opBeginMarkedContent},
  {"BT",  0, {tchkNone},
          &Gfx::opBeginText},
  {"BX",  0, {tchkNone},
          &Gfx::opBeginIgnoreUndef},
  {"CS",  1, {tchkName},
          &Gfx::opSetStrokeColorSpace},
  {"DP",  2, {tchkName,   tchkProps},
          &Gfx::opMarkPoint},
  {"Do",  1, {tchkName},
          &Gfx::opXObject},
  {"EI",  0, {tchkNone},
          &Gfx::opEndImage},
  {"EMC", 0, {tchkNone},
          &Gfx::opEndMarkedContent},
  {"ET",  0, {tchkNone},
          &Gfx::opEndText},
  {"EX",  0, {tchkNone},
          &Gfx::opEndIgnoreUndef},
  {"F",   0, {tchkNone},
          &Gfx::opFill},
  {"G",   1, {tchkNum},
          &Gfx::opSetStrokeGray},
  {"ID",  0, {tchkNone},
          &Gfx::opImageData},
  {"J",   1, {tchkInt},
          &Gfx::opSetLineCap},
  {"K",   4, {tchkNum,    tchkNum,    tchkNum,    tchkNum},
          &Gfx::opSetStrokeCMYKColor},
  {"M",   1, {tchkNum},
          &Gfx::opSetMiterLimit},
  {"MP",  1, {tchkName},
          &Gfx::opMarkPoint},
  {"Q",   0, {tchkNone},
          &Gfx::opRestore},
  {"RG",  3, {tchkNum,    tchkNum,    tchkNum},
          &Gfx::opSetStrokeRGBColor},
  {"S",   0, {tchkNone},
          &Gfx::opStroke},
  {"SC",  -4, {tchkNum,   tchkNum,    tchkNum,    tchkNum},
          &Gfx::opSetStrokeColor},
  {"SCN", -33, {tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN},
          &Gfx::opSetStrokeColorN},
  {"T*",  0, {tchkNone},
          &Gfx::opTextNextLine},
  {"TD",  2, {tchkNum,    tchkNum},
          &Gfx::opTextMoveSet},
  {"TJ",  1, {tchkArray},
          &Gfx::opShowSpaceText},
  {"TL",  1, {tchkNum},
          &Gfx::opSetTextLeading},
  {"Tc",  1, {tchkNum},
          &Gfx::opSetCharSpacing},
  {"Td",  2, {tchkNum,    tchkNum},
          &Gfx::opTextMove},
  {"Tf",  2, {tchkName,   tchkNum},
          &Gfx::opSetFont},
  {"Tj",  1, {tchkString},
          &Gfx::opShowText},
  {"Tm",  6, {tchkNum,    tchkNum,    tchkNum,    tchkNum,
        tchkNum,    tchkNum},
          &Gfx::opSetTextMatrix},
  {"Tr",  1, {tchkInt},
          &Gfx::opSetTextRender},
  {"Ts",  1, {tchkNum},
          &Gfx::opSetTextRise},
  {"Tw",  1, {tchkNum},
          &Gfx::opSetWordSpacing},
  {"Tz",  1, {tchkNum},
          &Gfx::opSetHorizScaling},
  {"W",   0, {tchkNone},
          &Gfx::opClip},
  {"W*",  0, {tchkNone},
          &Gfx::opEOClip},
  {"b",   0, {tchkNone},
          &Gfx::opCloseFillStroke},
  {"b*",  0, {tchkNone},
          &Gfx::opCloseEOFillStroke},
  {"c",   6, {tchkNum,    tchkNum,    tchkNum,    tchkNum,
        tchkNum,    tchkNum},
          &Gfx::opCurveTo},
  {"cm",  6, {tchkNum,    tchkNum,    tchkNum,    tchkNum,
        tchkNum,    tchkNum},
          &Gfx::opConcat},
  {"cs",  1, {tchkName},
          &Gfx::opSetFillColorSpace},
  {"d",   2, {tchkArray,  tchkNum},
          &Gfx::opSetDash},
  {"d0",  2, {tchkNum,    tchkNum},
          &Gfx::opSetCharWidth},
  {"d1",  6, {tchkNum,    tchkNum,    tchkNum,    tchkNum,
        tchkNum,    tchkNum},
          &Gfx::opSetCacheDevice},
  {"f",   0, {tchkNone},
          &Gfx::opFill},
  {"f*",  0, {tchkNone},
          &Gfx::opEOFill},
  {"g",   1, {tchkNum},
          &Gfx::opSetFillGray},
  {"gs",  1, {tchkName},
          &Gfx::opSetExtGState},
  {"h",   0, {tchkNone},
          &Gfx::opClosePath},
  {"i",   1, {tchkNum},
          &Gfx::opSetFlat},
  {"j",   1, {tchkInt},
          &Gfx::opSetLineJoin},
  {"k",   4, {tchkNum,    tchkNum,    tchkNum,    tchkNum},
          &Gfx::opSetFillCMYKColor},
  {"l",   2, {tchkNum,    tchkNum},
          &Gfx::opLineTo},
  {"m",   2, {tchkNum,    tchkNum},
          &Gfx::opMoveTo},
  {"n",   0, {tchkNone},
          &Gfx::opEndPath},
  {"q",   0, {tchkNone},
          &Gfx::opSave},
  {"re",  4, {tchkNum,    tchkNum,    tchkNum,    tchkNum},
          &Gfx::opRectangle},
  {"rg",  3, {tchkNum,    tchkNum,    tchkNum},
          &Gfx::opSetFillRGBColor},
  {"ri",  1, {tchkName},
          &Gfx::opSetRenderingIntent},
  {"s",   0, {tchkNone},
          &Gfx::opCloseStroke},
  {"sc",  -4, {tchkNum,   tchkNum,    tchkNum,    tchkNum},
          &Gfx::opSetFillColor},
  {"scn", -33, {tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN,   tchkSCN,    tchkSCN,    tchkSCN,
          tchkSCN},
          &Gfx::opSetFillColorN},
  {"sh",  1, {tchkName},
          &Gfx::opShFill},
  {"v",   4, {tchkNum,    tchkNum,    tchkNum,    tchkNum},
          &Gfx::opCurveTo1},
  {"w",   1, {tchkNum},
          &Gfx::opSetLineWidth},
  {"y",   4, {tchkNum,    tchkNum,    tchkNum,    tchkNum},
          &Gfx::opCurveTo2},
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_check_is_an_error() {
        let text = r#"{"zz", 1, {tchkBogus}, &Gfx::opNothing},"#;
        assert!(matches!(
            parse_entries(text),
            Err(OpgenError::UnknownOperandType(t)) if t == "tchkBogus"
        ));
    }

    #[test]
    fn count_mismatch_is_an_error() {
        let text = r#"{"zz", 2, {tchkNum}, &Gfx::opNothing},"#;
        assert!(matches!(
            parse_entries(text),
            Err(OpgenError::OperandCountMismatch { declared: 2, listed: 1, .. })
        ));
    }

    #[test]
    fn quote_operator_name_is_decoded() {
        let ops = parse_table().unwrap();
        let quote = ops.iter().find(|op| op.name == "\"").unwrap();
        assert_eq!(quote.count, 3);
        assert_eq!(
            quote.operands,
            vec![OperandKind::Number, OperandKind::Number, OperandKind::String]
        );
        assert_eq!(quote.handler, "MoveSetShowText");
    }
}
