use crate::compare::content::differing;
use crate::compare::entry_set::only_in;
use crate::error::CompareError;
use crate::trees::tree::Tree;
use std::path::Path;
use tracing::debug;

/// Handler for an entry present under a single root. Receives the caller
/// context, the root the entry lives under, and the entry path.
pub type UniqueHandler<'h, C> = Box<dyn FnMut(&mut C, &Path, &str) -> anyhow::Result<()> + 'h>;

/// Handler for an entry present under both roots with differing contents.
/// Receives the caller context, both roots, and the entry path.
pub type DiffersHandler<'h, C> =
    Box<dyn FnMut(&mut C, &Path, &Path, &str) -> anyhow::Result<()> + 'h>;

/// The capability set of comparison consumers.
///
/// Each slot is independently optional; an absent slot silently drops that
/// category of finding. Running a comparison with no slot configured at all
/// is permitted and has no observable effect.
pub struct Handlers<'h, C> {
    only_in_first: Option<UniqueHandler<'h, C>>,
    only_in_second: Option<UniqueHandler<'h, C>>,
    differs: Option<DiffersHandler<'h, C>>,
}

impl<C> Default for Handlers<'_, C> {
    fn default() -> Self {
        Handlers {
            only_in_first: None,
            only_in_second: None,
            differs: None,
        }
    }
}

impl<'h, C> Handlers<'h, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once for every entry present only under the first root.
    pub fn on_only_in_first(
        mut self,
        handler: impl FnMut(&mut C, &Path, &str) -> anyhow::Result<()> + 'h,
    ) -> Self {
        self.only_in_first = Some(Box::new(handler));
        self
    }

    /// Called once for every entry present only under the second root.
    pub fn on_only_in_second(
        mut self,
        handler: impl FnMut(&mut C, &Path, &str) -> anyhow::Result<()> + 'h,
    ) -> Self {
        self.only_in_second = Some(Box::new(handler));
        self
    }

    /// Called once for every file present under both roots with byte-unequal
    /// contents.
    pub fn on_differs(
        mut self,
        handler: impl FnMut(&mut C, &Path, &Path, &str) -> anyhow::Result<()> + 'h,
    ) -> Self {
        self.differs = Some(Box::new(handler));
        self
    }

    fn is_empty(&self) -> bool {
        self.only_in_first.is_none() && self.only_in_second.is_none() && self.differs.is_none()
    }
}

/// Compares the trees under two roots and dispatches every finding to the
/// configured handlers, threading `context` through unchanged.
///
/// Both roots are validated before any traversal happens. Findings fall in
/// three categories: entries only under the first root, entries only under
/// the second root, and files under both whose contents differ. Iteration
/// order within a category is not part of the contract.
///
/// There is no aggregate return value; all observable effect happens
/// through handler side effects on `context`. A handler error aborts the
/// remaining dispatch immediately and is propagated uninterpreted, so side
/// effects already performed by earlier invocations stay in place.
pub fn compare<C>(
    first_root: &Path,
    second_root: &Path,
    handlers: &mut Handlers<'_, C>,
    context: &mut C,
) -> Result<(), CompareError> {
    let first = Tree::open(first_root)?;
    let second = Tree::open(second_root)?;

    if handlers.is_empty() {
        debug!("no handlers configured, comparison has no observable effect");
    }

    let first_entries = first.list()?;
    let second_entries = second.list()?;

    let first_only = only_in(&first_entries, &second_entries);
    let second_only = only_in(&second_entries, &first_entries);
    let changed = differing(&first, &first_entries, &second, &second_entries);

    debug!(
        "dispatching {} + {} unique entries, {} changed files",
        first_only.len(),
        second_only.len(),
        changed.len()
    );

    if let Some(handler) = handlers.only_in_first.as_mut() {
        for entry in &first_only {
            handler(context, first.root(), entry)?;
        }
    }

    if let Some(handler) = handlers.only_in_second.as_mut() {
        for entry in &second_only {
            handler(context, second.root(), entry)?;
        }
    }

    if let Some(handler) = handlers.differs.as_mut() {
        for entry in &changed {
            handler(context, first.root(), second.root(), entry)?;
        }
    }

    Ok(())
}
