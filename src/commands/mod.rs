//! Command implementations consuming the comparison stream
//!
//! The comparison core never writes to the filesystem or the terminal; all
//! of that policy lives here:
//!
//! - `report`: print a one-line notice per finding (smoke-test consumer)
//! - `copy_diff`: copy new and changed entries into an output directory

pub mod copy_diff;
pub mod report;
