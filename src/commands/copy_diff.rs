use crate::compare::dispatch::{Handlers, compare};
use crate::trees::tree::ENTRY_SEPARATOR;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Counters accumulated while copying differences.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyStats {
    pub files_copied: usize,
    pub dirs_created: usize,
}

struct CopyContext<'w> {
    writer: &'w mut dyn Write,
    destination: PathBuf,
    verbose: bool,
    stats: CopyStats,
}

impl CopyContext<'_> {
    // Directory markers materialize as (possibly empty) directories; files
    // get their intermediate directories created on demand.
    fn copy_entry(&mut self, root: &Path, entry: &str) -> anyhow::Result<()> {
        let target = self.destination.join(entry.trim_end_matches(ENTRY_SEPARATOR));

        if entry.ends_with(ENTRY_SEPARATOR) {
            std::fs::create_dir_all(&target)
                .with_context(|| format!("failed to create directory {target:?}"))?;
            self.stats.dirs_created += 1;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {parent:?}"))?;
            }
            std::fs::copy(root.join(entry), &target)
                .with_context(|| format!("failed to copy {entry}"))?;
            self.stats.files_copied += 1;
        }

        if self.verbose {
            writeln!(self.writer, "copied {entry}")?;
        }

        Ok(())
    }
}

/// Copies every entry that is new or changed under `second_root` into
/// `destination`, creating intermediate directories as needed, and prints
/// how many files were copied.
///
/// Refuses to run when `second_root` was modified before `first_root`;
/// that sanity check belongs to this tool, not to the comparison core.
/// Entries present only under `first_root` are left alone, and neither
/// source root is ever written to.
pub fn copy_differences(
    writer: &mut dyn Write,
    first_root: &Path,
    second_root: &Path,
    destination: &Path,
    verbose: bool,
) -> anyhow::Result<CopyStats> {
    let first_modified = root_modified_time(first_root)?;
    let second_modified = root_modified_time(second_root)?;

    if second_modified < first_modified {
        anyhow::bail!(
            "refusing to copy: {} was modified before {}",
            second_root.display(),
            first_root.display()
        );
    }

    std::fs::create_dir_all(destination)
        .with_context(|| format!("failed to create output directory {destination:?}"))?;

    debug!(
        "copying differences from {:?} into {:?}",
        second_root, destination
    );

    let mut handlers = Handlers::new()
        .on_only_in_second(|ctx: &mut CopyContext, root: &Path, entry: &str| {
            ctx.copy_entry(root, entry)
        })
        .on_differs(
            |ctx: &mut CopyContext, _first: &Path, second: &Path, entry: &str| {
                ctx.copy_entry(second, entry)
            },
        );

    let mut context = CopyContext {
        writer,
        destination: destination.to_path_buf(),
        verbose,
        stats: CopyStats::default(),
    };

    compare(first_root, second_root, &mut handlers, &mut context)?;

    writeln!(context.writer, "{} files copied", context.stats.files_copied)?;

    Ok(context.stats)
}

fn root_modified_time(root: &Path) -> anyhow::Result<SystemTime> {
    let metadata =
        std::fs::metadata(root).with_context(|| format!("failed to stat {root:?}"))?;

    metadata
        .modified()
        .with_context(|| format!("modification time unavailable for {root:?}"))
}
