use crate::compare::dispatch::{Handlers, compare};
use colored::Colorize;
use derive_new::new;
use std::io::Write;
use std::path::Path;

/// Per-category finding counts accumulated over one report run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub only_in_first: usize,
    pub only_in_second: usize,
    pub differing: usize,
}

#[derive(new)]
struct ReportContext<'w> {
    writer: &'w mut dyn Write,
    #[new(default)]
    summary: ReportSummary,
}

/// Prints a one-line notice per finding: `<` for entries only under the
/// first root, `>` for entries only under the second, `~` for files whose
/// contents differ. Verbose mode appends a summary footer.
///
/// This is the reference consumer of the comparison stream, meant for eyes
/// and smoke tests; synchronization tools are expected to bring their own
/// handlers instead of parsing this output.
pub fn report(
    writer: &mut dyn Write,
    first_root: &Path,
    second_root: &Path,
    verbose: bool,
) -> anyhow::Result<ReportSummary> {
    let mut handlers = Handlers::new()
        .on_only_in_first(|ctx: &mut ReportContext, _root: &Path, entry: &str| {
            ctx.summary.only_in_first += 1;
            writeln!(ctx.writer, "{} {}", "<".red(), entry)?;
            Ok(())
        })
        .on_only_in_second(|ctx: &mut ReportContext, _root: &Path, entry: &str| {
            ctx.summary.only_in_second += 1;
            writeln!(ctx.writer, "{} {}", ">".green(), entry)?;
            Ok(())
        })
        .on_differs(
            |ctx: &mut ReportContext, _first: &Path, _second: &Path, entry: &str| {
                ctx.summary.differing += 1;
                writeln!(ctx.writer, "{} {}", "~".yellow(), entry)?;
                Ok(())
            },
        );

    let mut context = ReportContext::new(writer);
    compare(first_root, second_root, &mut handlers, &mut context)?;

    let summary = context.summary;
    if verbose {
        writeln!(
            context.writer,
            "{} only in {}, {} only in {}, {} differ",
            summary.only_in_first,
            first_root.display(),
            summary.only_in_second,
            second_root.display(),
            summary.differing,
        )?;
    }

    Ok(summary)
}
