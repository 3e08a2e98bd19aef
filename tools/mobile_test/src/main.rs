use page_audit_core::checklist::SuiteKind;
use page_audit_core::{cli, logging};
use std::path::Path;

fn main() {
    logging::init_tracing();
    let stdout = std::io::stdout();
    let status = cli::run(SuiteKind::Mobile, Path::new("."), &mut stdout.lock());
    std::process::exit(status);
}
