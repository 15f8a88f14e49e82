//! opgen - generators for PDF content-stream operator tables.
//!
//! Holds fixed reference tables describing the PDF content-stream
//! operators (the PDF 32000-1:2008 Annex A summary and the xpdf `Gfx`
//! dispatch table) and emits Go map literals built from them.

pub mod annex_a;
pub mod codegen;
pub mod error;
pub mod gfx_ops;
pub mod summary;

pub use error::{OpgenError, Result};
