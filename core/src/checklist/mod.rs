use crate::error::{CoreError, CoreResult};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The three page audits shipped with the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteKind {
    Seo,
    Mobile,
    Ipad,
}

impl SuiteKind {
    pub fn suite_id(self) -> &'static str {
        match self {
            SuiteKind::Seo => "seo_v1",
            SuiteKind::Mobile => "mobile_v1",
            SuiteKind::Ipad => "ipad_v1",
        }
    }

    fn embedded_json(self) -> &'static str {
        match self {
            SuiteKind::Seo => include_str!("seo_v1.json"),
            SuiteKind::Mobile => include_str!("mobile_v1.json"),
            SuiteKind::Ipad => include_str!("ipad_v1.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub pattern: String,
    pub required: bool,
}

impl Check {
    /// Unanchored. ASCII letters match either case and nothing else; `.` stops at
    /// `\n`, `\r`, U+2028 and U+2029.
    pub fn compile(&self) -> CoreResult<Regex> {
        RegexBuilder::new(&translate_pattern(&self.pattern))
            .crlf(true)
            .build()
            .map_err(|source| CoreError::InvalidPattern {
                check: self.name.clone(),
                source,
            })
    }
}

const ANY_BUT_LINE_TERMINATOR: &str = r"[^\n\r\u{2028}\u{2029}]";

/// Rewrites a checklist pattern into an equivalent case-sensitive one: each ASCII letter
/// becomes a two-case class and each bare `.` excludes every line terminator.
/// Escapes, group prefixes and non-ASCII characters pass through unchanged.
fn translate_pattern(pattern: &str) -> String {
    let src: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 3);
    let mut i = 0;
    while i < src.len() {
        let c = src[i];
        match c {
            '\\' => i = copy_escape(&src, i, &mut out),
            '[' => i = translate_class(&src, i, &mut out),
            '(' if src.get(i + 1) == Some(&'?') => {
                // flags and group names as written
                out.push('(');
                i += 1;
                while i < src.len() {
                    let g = src[i];
                    out.push(g);
                    i += 1;
                    if matches!(g, ':' | '>' | '=' | '!' | ')') {
                        break;
                    }
                }
            }
            '.' => {
                out.push_str(ANY_BUT_LINE_TERMINATOR);
                i += 1;
            }
            c if c.is_ascii_alphabetic() => {
                out.push('[');
                out.push(c.to_ascii_lowercase());
                out.push(c.to_ascii_uppercase());
                out.push(']');
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Copies `\x`, or `\x{...}` for braced escapes, starting at the backslash. Returns the next index.
fn copy_escape(src: &[char], start: usize, out: &mut String) -> usize {
    out.push('\\');
    let mut i = start + 1;
    let Some(&e) = src.get(i) else {
        return i;
    };
    out.push(e);
    i += 1;
    if e.is_ascii_alphabetic() && src.get(i) == Some(&'{') {
        while i < src.len() {
            out.push(src[i]);
            i += 1;
            if src[i - 1] == '}' {
                break;
            }
        }
    }
    i
}

/// Translates a bracket class starting at `[`: letters and letter ranges gain their other case.
fn translate_class(src: &[char], start: usize, out: &mut String) -> usize {
    out.push('[');
    let mut i = start + 1;
    if src.get(i) == Some(&'^') {
        out.push('^');
        i += 1;
    }
    if src.get(i) == Some(&']') {
        out.push(']');
        i += 1;
    }
    while i < src.len() {
        let c = src[i];
        match c {
            ']' => {
                out.push(']');
                return i + 1;
            }
            '\\' => i = copy_escape(src, i, out),
            '[' if src.get(i + 1) == Some(&':') => {
                // POSIX class such as [:alpha:]
                while i < src.len() {
                    out.push(src[i]);
                    i += 1;
                    if src[i - 1] == ']' {
                        break;
                    }
                }
            }
            '[' => i = translate_class(src, i, out),
            c if c.is_ascii_alphabetic() => match (src.get(i + 1), src.get(i + 2)) {
                (Some(&'-'), Some(&d)) if d != ']' && d != '\\' => {
                    out.push(c);
                    out.push('-');
                    out.push(d);
                    if d.is_ascii_alphabetic() && d.is_ascii_lowercase() == c.is_ascii_lowercase()
                    {
                        out.push(swap_ascii_case(c));
                        out.push('-');
                        out.push(swap_ascii_case(d));
                    }
                    i += 3;
                }
                _ => {
                    out.push(c);
                    out.push(swap_ascii_case(c));
                    i += 1;
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    i
}

fn swap_ascii_case(c: char) -> char {
    if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c.to_ascii_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistGroup {
    pub heading: String,
    pub checks: Vec<Check>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBlock {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    pub suite_id: String,
    pub banner: String,
    /// Files probed for existence before the page is read. Absence is reported, never fatal.
    #[serde(default)]
    pub companion_files: Vec<String>,
    pub groups: Vec<ChecklistGroup>,
    pub summary_heading: String,
    pub recommendations: NoteBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<NoteBlock>,
    pub closing: String,
}

impl Suite {
    pub fn check_count(&self) -> usize {
        self.groups.iter().map(|g| g.checks.len()).sum()
    }
}

pub fn load_suite(kind: SuiteKind) -> CoreResult<Suite> {
    let suite: Suite = serde_json::from_str(kind.embedded_json())?;
    if suite.suite_id != kind.suite_id() {
        return Err(CoreError::InvalidSuite(format!(
            "embedded suite is {} but {} was requested",
            suite.suite_id,
            kind.suite_id()
        )));
    }
    if suite.groups.is_empty() {
        return Err(CoreError::InvalidSuite(format!(
            "{} has no checklist groups",
            suite.suite_id
        )));
    }
    for g in &suite.groups {
        if g.checks.is_empty() {
            return Err(CoreError::InvalidSuite(format!(
                "{}: group '{}' has no checks",
                suite.suite_id, g.heading
            )));
        }
    }
    debug!(
        suite = %suite.suite_id,
        groups = suite.groups.len(),
        checks = suite.check_count(),
        "loaded embedded suite"
    );
    Ok(suite)
}
