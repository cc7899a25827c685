//! # Introduction
//!
//! itycheck validates source files written in the Ity teaching language, a
//! small C-like classroom language.  It does not execute or translate
//! anything: the output is a diagnostic report showing how the input
//! tokenized and which grammar rule matched on each source line.
//!
//! ## Checking pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → {parse tree, rule-match log} → report
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the source, resolving `Require(file);`
//!    inclusions by splicing the included file's tokens in place.
//! 2. [`parser::parse`] — walks the token stream top-down with backtracking,
//!    builds a [`parser::tree::ParseTreeNode`], and logs one
//!    [`parser::parse::MatchRecord`] per concluded production.
//!
//! Both phases recover from errors locally and keep going; failures are
//! reported as counters and log entries, never as panics.
//!
//! ## Supported language
//!
//! Types: `Ity`, `Sity`, `Cwq`, `CwqSequence`, `Ifity`, `Sifity`,
//! `Valueless`, `Logical`.
//! Statements: assignment, `TrueFor`/`Else`, `However`, `When`,
//! `Scan(Conditionof x)`, `Srap`, `Endthis`, `Respondwith`, function calls.
//! A program is one class declaration bracketed by a start symbol (`@`/`^`)
//! and an end symbol (`$`/`#`).

pub mod parser;
