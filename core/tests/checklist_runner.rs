use page_audit_core::checklist::{load_suite, Check, ChecklistGroup, SuiteKind};
use page_audit_core::error::CoreError;
use page_audit_core::loader::Page;
use page_audit_core::report::Outcome;
use page_audit_core::runner::{evaluate_group, ChecklistRunner};

const VIEWPORT_ONLY: &str = r#"<meta name="viewport" content="width=device-width">"#;

fn audit(kind: SuiteKind, html: &str) -> page_audit_core::report::AuditReport {
    let suite = load_suite(kind).unwrap();
    let runner = ChecklistRunner::for_suite(&suite).unwrap();
    runner.evaluate(&Page::from_text("index.html", html))
}

fn group(checks: &[(&str, &str, bool)]) -> ChecklistGroup {
    ChecklistGroup {
        heading: "test".to_string(),
        checks: checks
            .iter()
            .map(|(name, pattern, required)| Check {
                name: name.to_string(),
                pattern: pattern.to_string(),
                required: *required,
            })
            .collect(),
    }
}

#[test]
fn viewport_only_page_finds_viewport_and_misses_seo_basics() {
    let mobile = audit(SuiteKind::Mobile, VIEWPORT_ONLY);
    assert_eq!(mobile.outcome_of("Viewport Meta Tag"), Some(Outcome::Found));
    assert_eq!(mobile.passed, 1);

    let seo = audit(SuiteKind::Seo, VIEWPORT_ONLY);
    assert_eq!(seo.outcome_of("Viewport Meta"), Some(Outcome::Found));
    assert_eq!(seo.outcome_of("Title Tag"), Some(Outcome::MissingRequired));
    assert_eq!(
        seo.outcome_of("Meta Description"),
        Some(Outcome::MissingRequired)
    );
    assert_eq!(
        seo.outcome_of("DNS Prefetch"),
        Some(Outcome::MissingOptional)
    );
}

#[test]
fn ipad_breakpoint_needs_769_to_1024() {
    let hit = audit(
        SuiteKind::Ipad,
        "@media (min-width: 769px) and (max-width: 1024px) { .nav { gap: 1rem; } }",
    );
    assert_eq!(
        hit.outcome_of("iPad Breakpoint (769px-1024px)"),
        Some(Outcome::Found)
    );

    let miss = audit(
        SuiteKind::Ipad,
        "@media (min-width: 768px) and (max-width: 1023px) { .nav { gap: 1rem; } }",
    );
    assert_eq!(
        miss.outcome_of("iPad Breakpoint (769px-1024px)"),
        Some(Outcome::MissingRequired)
    );
}

#[test]
fn full_fixtures_score_100_and_empty_page_scores_0() {
    let cases = [
        (SuiteKind::Seo, include_str!("fixtures/seo_full.html"), 25),
        (SuiteKind::Mobile, include_str!("fixtures/mobile_full.html"), 18),
        (SuiteKind::Ipad, include_str!("fixtures/ipad_full.html"), 24),
    ];
    for (kind, html, total) in cases {
        let full = audit(kind, html);
        assert_eq!(full.total, total);
        assert_eq!(full.passed, total, "{:?}", kind);
        assert_eq!(full.score, 100);

        let empty = audit(kind, "");
        assert_eq!(empty.total, total);
        assert_eq!(empty.passed, 0);
        assert_eq!(empty.score, 0);
    }
}

#[test]
fn missing_required_check_lowers_passed() {
    let full = include_str!("fixtures/mobile_full.html");
    let without_optimizer = full.replace("optimizeForMobile", "optimise");
    let a = audit(SuiteKind::Mobile, full);
    let b = audit(SuiteKind::Mobile, &without_optimizer);
    assert_eq!(
        b.outcome_of("Mobile Optimization"),
        Some(Outcome::MissingRequired)
    );
    assert_eq!(b.passed, a.passed - 1);
    assert_eq!(b.score, 94);
}

#[test]
fn matching_ignores_case() {
    let report = evaluate_group(
        &group(&[("Charset", r#"<meta charset="UTF-8""#, true)]),
        r#"<META CHARSET="utf-8">"#,
    )
    .unwrap();
    assert_eq!(report.results[0].outcome, Outcome::Found);
}

#[test]
fn dot_does_not_cross_line_breaks() {
    let g = group(&[("Title", "<title>.*</title>", true)]);
    let split = evaluate_group(&g, "<title>\nRoboNeura\n</title>").unwrap();
    assert_eq!(split.results[0].outcome, Outcome::MissingRequired);
    let inline = evaluate_group(&g, "<title>RoboNeura</title>").unwrap();
    assert_eq!(inline.results[0].outcome, Outcome::Found);
}

#[test]
fn dot_stops_at_carriage_returns_and_unicode_separators() {
    let g = group(&[("Title", "<title>.*</title>", true)]);
    for text in [
        "<title>\rRoboNeura\r</title>",
        "<title>\r\nRoboNeura</title>",
        "<title>\u{2028}RoboNeura</title>",
        "<title>RoboNeura\u{2029}</title>",
    ] {
        let report = evaluate_group(&g, text).unwrap();
        assert_eq!(
            report.results[0].outcome,
            Outcome::MissingRequired,
            "{:?}",
            text
        );
    }
}

#[test]
fn ipad_breakpoint_split_by_bare_cr_is_missing() {
    let report = audit(
        SuiteKind::Ipad,
        "@media (min-width: 769px)\r and (max-width: 1024px) { .nav { gap: 1rem; } }",
    );
    assert_eq!(
        report.outcome_of("iPad Breakpoint (769px-1024px)"),
        Some(Outcome::MissingRequired)
    );
}

#[test]
fn case_folding_is_ascii_only() {
    let g = group(&[("Hamburger Icon", "fa-bars", true), ("Touch", "44px", true)]);
    let upper = evaluate_group(&g, "FA-BARS 44PX").unwrap();
    assert_eq!(upper.passed(), 2);

    // long s (U+017F) and Kelvin sign (U+212A) fold to ASCII under Unicode rules only
    let folded = evaluate_group(
        &group(&[("Hamburger Icon", "fa-bars", true), ("Kit", "kit", true)]),
        "fa-bar\u{17f} \u{212a}it",
    )
    .unwrap();
    assert_eq!(folded.passed(), 0);
}

#[test]
fn escaped_dot_still_matches_literally() {
    let g = group(&[("External CSS", r"<link.*\.css", true)]);
    let hit = evaluate_group(&g, r#"<LINK rel="stylesheet" href="styles.CSS">"#).unwrap();
    assert_eq!(hit.results[0].outcome, Outcome::Found);
    let miss = evaluate_group(&g, r#"<link rel="stylesheet" href="stylesXcss">"#).unwrap();
    assert_eq!(miss.results[0].outcome, Outcome::MissingRequired);
}

#[test]
fn matches_can_span_unrelated_markup_on_one_line() {
    let g = group(&[("Logo", "logo.*RoboNeura", true)]);
    let report =
        evaluate_group(&g, r#"<img class="logo" src="x.png"><p>RoboNeura</p>"#).unwrap();
    assert_eq!(report.results[0].outcome, Outcome::Found);
}

#[test]
fn results_keep_declared_order() {
    let g = group(&[("b", "b", false), ("a", "a", true), ("c", "c", true)]);
    let report = evaluate_group(&g, "a").unwrap();
    let names: Vec<&str> = report.results.iter().map(|r| r.check.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
    assert_eq!(
        report.results.iter().map(|r| r.outcome).collect::<Vec<_>>(),
        vec![
            Outcome::MissingOptional,
            Outcome::Found,
            Outcome::MissingRequired
        ]
    );
}

#[test]
fn malformed_pattern_is_reported_with_check_name() {
    let err = evaluate_group(&group(&[("Broken", "(unclosed", true)]), "x").unwrap_err();
    match err {
        CoreError::InvalidPattern { check, .. } => assert_eq!(check, "Broken"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn same_page_yields_identical_report() {
    let html = include_str!("fixtures/ipad_full.html");
    let a = audit(SuiteKind::Ipad, html);
    let b = audit(SuiteKind::Ipad, html);
    assert_eq!(a, b);
    assert_eq!(a.page_sha256.len(), 64);
}
