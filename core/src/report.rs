use crate::checklist::{Check, NoteBlock, Suite};
use crate::loader::FilePresence;
use std::io::Write;

pub const PRESENCE_HEADING: &str = "📁 Checking Required Files:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    MissingRequired,
    MissingOptional,
}

impl Outcome {
    pub fn classify(found: bool, required: bool) -> Self {
        match (found, required) {
            (true, _) => Outcome::Found,
            (false, true) => Outcome::MissingRequired,
            (false, false) => Outcome::MissingOptional,
        }
    }

    // The warning sign carries a variation selector, hence two spaces.
    pub fn glyph(self) -> &'static str {
        match self {
            Outcome::Found => "✅",
            Outcome::MissingRequired => "❌",
            Outcome::MissingOptional => "⚠️ ",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Found => "Found",
            Outcome::MissingRequired => "Missing (Required)",
            Outcome::MissingOptional => "Missing (Optional)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub check: Check,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub heading: String,
    pub results: Vec<CheckResult>,
}

impl GroupReport {
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == Outcome::Found)
            .count()
    }

    pub fn outcome_of(&self, name: &str) -> Option<Outcome> {
        self.results
            .iter()
            .find(|r| r.check.name == name)
            .map(|r| r.outcome)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub suite_id: String,
    pub page_sha256: String,
    pub groups: Vec<GroupReport>,
    pub total: usize,
    pub passed: usize,
    pub score: u32,
}

impl AuditReport {
    pub fn from_groups(suite_id: &str, page_sha256: &str, groups: Vec<GroupReport>) -> Self {
        let total = groups.iter().map(|g| g.results.len()).sum();
        let passed = groups.iter().map(GroupReport::passed).sum();
        Self {
            suite_id: suite_id.to_string(),
            page_sha256: page_sha256.to_string(),
            groups,
            total,
            passed,
            score: score_percent(passed, total),
        }
    }

    /// First outcome recorded for `name`, scanning groups in order.
    pub fn outcome_of(&self, name: &str) -> Option<Outcome> {
        self.groups.iter().find_map(|g| g.outcome_of(name))
    }
}

/// `round(passed / total * 100)` with halves rounded up, in integer arithmetic.
pub fn score_percent(passed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((passed as u64 * 200 + total as u64) / (total as u64 * 2)) as u32
}

pub fn write_banner<W: Write>(out: &mut W, suite: &Suite) -> std::io::Result<()> {
    writeln!(out, "{}", suite.banner)
}

pub fn write_presence<W: Write>(out: &mut W, presence: &[FilePresence]) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", PRESENCE_HEADING)?;
    for p in presence {
        if p.present {
            writeln!(out, "✅ {} - Found", p.file)?;
        } else {
            writeln!(out, "❌ {} - Missing", p.file)?;
        }
    }
    Ok(())
}

pub fn write_missing_page<W: Write>(out: &mut W, file: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "❌ {} not found", file)
}

/// Group sections, summary, and the fixed footer blocks. Every section opens with a blank line.
pub fn write_report<W: Write>(
    out: &mut W,
    suite: &Suite,
    report: &AuditReport,
) -> std::io::Result<()> {
    for g in &report.groups {
        writeln!(out)?;
        writeln!(out, "{}", g.heading)?;
        for r in &g.results {
            writeln!(
                out,
                "{} {} - {}",
                r.outcome.glyph(),
                r.check.name,
                r.outcome.label()
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", suite.summary_heading)?;
    writeln!(out, "Total Checks: {}", report.total)?;
    writeln!(out, "Passed: {}", report.passed)?;
    writeln!(out, "Score: {}%", report.score)?;

    write_numbered(out, &suite.recommendations)?;
    if let Some(reference) = &suite.reference {
        write_bulleted(out, reference)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", suite.closing)
}

fn write_numbered<W: Write>(out: &mut W, block: &NoteBlock) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", block.heading)?;
    for (i, item) in block.items.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item)?;
    }
    Ok(())
}

fn write_bulleted<W: Write>(out: &mut W, block: &NoteBlock) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", block.heading)?;
    for item in &block.items {
        writeln!(out, "- {}", item)?;
    }
    Ok(())
}
