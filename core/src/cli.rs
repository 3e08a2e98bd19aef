use crate::checklist::{load_suite, Suite, SuiteKind};
use crate::error::{CoreError, CoreResult};
use crate::loader::{self, PRIMARY_PAGE};
use crate::report;
use crate::runner::ChecklistRunner;
use std::io::Write;
use std::path::Path;
use tracing::{error, info, warn};

/// Runs one audit against `root` and returns the process exit status.
///
/// 0 once a report is printed (whatever the score), 1 when the page is missing or
/// unreadable, 2 when the embedded suite is broken.
pub fn run<W: Write>(kind: SuiteKind, root: &Path, out: &mut W) -> i32 {
    let (suite, runner) = match prepare(kind) {
        Ok(x) => x,
        Err(e) => {
            error!(suite = kind.suite_id(), error = %e, "embedded suite rejected");
            eprintln!("suite error: {}", e);
            return 2;
        }
    };

    let status = drive(&suite, &runner, root, out).and_then(|status| {
        out.flush()?;
        Ok(status)
    });
    match status {
        Ok(status) => status,
        Err(e) => {
            error!(error = %e, "failed to write report");
            1
        }
    }
}

fn prepare(kind: SuiteKind) -> CoreResult<(Suite, ChecklistRunner)> {
    let suite = load_suite(kind)?;
    let runner = ChecklistRunner::for_suite(&suite)?;
    Ok((suite, runner))
}

fn drive<W: Write>(
    suite: &Suite,
    runner: &ChecklistRunner,
    root: &Path,
    out: &mut W,
) -> CoreResult<i32> {
    report::write_banner(out, suite)?;

    if !suite.companion_files.is_empty() {
        let presence = loader::companion_presence(root, &suite.companion_files);
        report::write_presence(out, &presence)?;
    }

    let page = match loader::load_page(&root.join(PRIMARY_PAGE)) {
        Ok(p) => p,
        Err(CoreError::MissingPage(name)) => {
            warn!(root = %root.display(), "{} not found", name);
            report::write_missing_page(out, &name)?;
            return Ok(1);
        }
        Err(e) => {
            warn!(root = %root.display(), error = %e, "page unreadable");
            writeln!(out)?;
            writeln!(out, "❌ {} could not be read: {}", PRIMARY_PAGE, e)?;
            return Ok(1);
        }
    };

    let audit = runner.evaluate(&page);
    report::write_report(out, suite, &audit)?;
    info!(
        suite = %audit.suite_id,
        total = audit.total,
        passed = audit.passed,
        score = audit.score,
        "audit complete"
    );
    Ok(0)
}
