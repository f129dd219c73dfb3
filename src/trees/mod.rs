//! Filesystem-facing comparison roots
//!
//! - `tree`: validated root handles and recursive entry listing

pub mod tree;
