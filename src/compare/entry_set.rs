use std::collections::BTreeSet;

/// The complete set of entry paths discovered beneath one comparison root.
///
/// Keys are `/`-separated relative paths; directory entries end with the
/// separator. A set is built once per tree per comparison and never mutated
/// afterwards. Paths are kept as strings rather than `PathBuf`s because
/// `Path` equality ignores trailing separators, which would erase the
/// directory marker.
pub type EntrySet = BTreeSet<String>;

/// Every entry path present in `first` and absent from `second`.
///
/// Pure set difference; swapping the arguments yields the opposite
/// direction, which is exactly how both "only" sets are obtained.
pub fn only_in(first: &EntrySet, second: &EntrySet) -> EntrySet {
    first.difference(second).cloned().collect()
}
