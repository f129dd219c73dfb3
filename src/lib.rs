//! Recursive two-tree directory comparison
//!
//! Walks two directory roots and classifies every relative entry path as
//! present only under the first root, present only under the second, or
//! present under both with byte-unequal file contents, then hands each
//! finding to caller-supplied handlers. The library itself only reads;
//! copying, printing, or counting policy lives with the consumer.
//!
//! - `trees`: filesystem-facing root handles and entry listing
//! - `compare`: set reconciliation, content comparison, and dispatch
//! - `commands`: CLI consumers of the comparison stream
//! - `error`: error types shared across the crate

pub mod commands;
pub mod compare;
pub mod error;
pub mod trees;
