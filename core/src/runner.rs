use crate::checklist::{Check, ChecklistGroup, Suite};
use crate::error::CoreResult;
use crate::loader::Page;
use crate::report::{AuditReport, CheckResult, GroupReport, Outcome};
use regex::Regex;
use tracing::trace;

struct CompiledCheck {
    check: Check,
    matcher: Regex,
}

struct CompiledGroup {
    heading: String,
    checks: Vec<CompiledCheck>,
}

impl CompiledGroup {
    fn compile(group: &ChecklistGroup) -> CoreResult<Self> {
        let checks = group
            .checks
            .iter()
            .map(|c| {
                Ok(CompiledCheck {
                    check: c.clone(),
                    matcher: c.compile()?,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self {
            heading: group.heading.clone(),
            checks,
        })
    }

    fn evaluate(&self, text: &str) -> GroupReport {
        let results = self
            .checks
            .iter()
            .map(|c| {
                let found = c.matcher.is_match(text);
                let outcome = Outcome::classify(found, c.check.required);
                trace!(check = %c.check.name, ?outcome, "evaluated check");
                CheckResult {
                    check: c.check.clone(),
                    outcome,
                }
            })
            .collect();
        GroupReport {
            heading: self.heading.clone(),
            results,
        }
    }
}

/// Holds every pattern of a suite compiled up front, so a bad pattern fails before any page is read.
pub struct ChecklistRunner {
    suite_id: String,
    groups: Vec<CompiledGroup>,
}

impl ChecklistRunner {
    pub fn for_suite(suite: &Suite) -> CoreResult<Self> {
        let groups = suite
            .groups
            .iter()
            .map(CompiledGroup::compile)
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self {
            suite_id: suite.suite_id.clone(),
            groups,
        })
    }

    pub fn evaluate(&self, page: &Page) -> AuditReport {
        let groups = self
            .groups
            .iter()
            .map(|g| g.evaluate(&page.content))
            .collect();
        AuditReport::from_groups(&self.suite_id, &page.sha256, groups)
    }
}

pub fn evaluate_group(group: &ChecklistGroup, text: &str) -> CoreResult<GroupReport> {
    Ok(CompiledGroup::compile(group)?.evaluate(text))
}
