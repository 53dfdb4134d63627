//! Template matching behaviour as seen by ACL files.

use proptest::prelude::*;
use template::{CasePolicy, TemplateMatcher};

const SENSITIVE: TemplateMatcher = TemplateMatcher::new(CasePolicy::Sensitive);
const INSENSITIVE: TemplateMatcher = TemplateMatcher::new(CasePolicy::Insensitive);

#[test]
fn lone_star_matches_everything() {
    assert!(SENSITIVE.matches("*", "index.html"));
    assert!(SENSITIVE.matches("*", ".hidden"));
}

#[test]
fn prefix_and_suffix_wildcards() {
    assert!(SENSITIVE.matches("report*", "report-2024.pdf"));
    assert!(SENSITIVE.matches("*.pdf", "report-2024.pdf"));
    assert!(SENSITIVE.matches("rep*.pdf", "report-2024.pdf"));
    assert!(!SENSITIVE.matches("rep*.pdf", "report-2024.txt"));
}

#[test]
fn tail_longer_than_name_does_not_match() {
    assert!(!SENSITIVE.matches("*.html", "html"));
    assert!(!SENSITIVE.matches("index.html", "index.htm"));
}

#[test]
fn question_mark_and_classes() {
    assert!(SENSITIVE.matches("page?.html", "page1.html"));
    assert!(!SENSITIVE.matches("page?.html", "page10.html"));
    assert!(SENSITIVE.matches("[ab]*.txt", "alpha.txt"));
    assert!(!SENSITIVE.matches("[ab]*.txt", "gamma.txt"));
}

#[test]
fn metacharacters_beyond_star_are_wildcards() {
    assert!(SENSITIVE.matches("what?.html", "whatx.html"));
    assert!(SENSITIVE.matches("[draft].html", "d.html"));
    assert!(!SENSITIVE.matches("[draft].html", "x.html"));
}

#[test]
fn escaped_metacharacters_match_literally() {
    assert!(SENSITIVE.matches(r"what\?.html", "what?.html"));
    assert!(!SENSITIVE.matches(r"what\?.html", "whatx.html"));
    assert!(SENSITIVE.matches(r"\[draft\].html", "[draft].html"));
    assert!(!SENSITIVE.matches(r"\[draft\].html", "d.html"));
}

#[test]
fn alternation_is_supported() {
    assert!(SENSITIVE.matches("*.{html,htm}", "legacy.htm"));
    assert!(!SENSITIVE.matches("*.{html,htm}", "legacy.txt"));
}

#[test]
fn case_policy_controls_folding() {
    assert!(!SENSITIVE.matches("*.HTML", "index.html"));
    assert!(INSENSITIVE.matches("*.HTML", "index.html"));
    assert!(INSENSITIVE.matches("Index.Html", "INDEX.HTML"));
    assert_eq!(INSENSITIVE.case_policy(), CasePolicy::Insensitive);
}

proptest! {
    #[test]
    fn plain_names_match_themselves(name in "[A-Za-z0-9._-]{1,24}") {
        prop_assert!(SENSITIVE.matches(&name, &name));
        prop_assert!(INSENSITIVE.matches(&name.to_uppercase(), &name));
    }

    #[test]
    fn star_suffix_matches_any_stem(stem in "[a-z0-9_-]{0,16}", ext in "[a-z]{1,4}") {
        let name = format!("{stem}.{ext}");
        let template = format!("*.{ext}");
        prop_assert!(SENSITIVE.matches(&template, &name));
    }
}
