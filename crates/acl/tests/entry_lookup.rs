//! Record scanning semantics of the two lookup modes.

use acl::{AclError, AclSource, CasePolicy, GroupDef, Method, MethodSet, TemplateMatcher};

fn source(text: &str) -> AclSource<&[u8]> {
    AclSource::from_reader(text.as_bytes(), TemplateMatcher::default())
}

fn group(text: &str) -> GroupDef {
    GroupDef::parse(text).unwrap()
}

#[test]
fn matching_template_and_method_returns_principals() {
    let mut acl = source("*.html : GET,PUT : alice,bob\n");
    let found = acl
        .find_first_matching_entry("/x/y/index.html", &Method::GET)
        .unwrap();
    assert_eq!(found, Some(group("alice,bob")));
}

#[test]
fn method_outside_the_list_finds_nothing() {
    let mut acl = source("*.html : GET,PUT : alice,bob\n");
    let found = acl
        .find_first_matching_entry("/x/y/index.html", &Method::DELETE)
        .unwrap();
    assert_eq!(found, None);
}

#[test]
fn first_qualifying_record_wins_not_first_template_match() {
    let mut acl = source("*.html : GET : record1\n*.html : PUT : record2\n");
    let found = acl
        .find_first_matching_entry("/x/index.html", &Method::PUT)
        .unwrap();
    assert_eq!(found, Some(group("record2")));
}

#[test]
fn method_tokens_are_case_insensitive() {
    let mut acl = source("*.html : get, Put : alice\n");
    assert!(
        acl.find_first_matching_entry("/index.html", &Method::PUT)
            .unwrap()
            .is_some()
    );
}

#[test]
fn repeated_calls_enumerate_in_file_order() {
    let text = "\
*.html : get,put : ari,timbl,robert
*.gif  : get     : everybody
*.html : get     : jim,james,jonathan,jojo
*      : get     : fallback
";
    let mut acl = source(text);
    let mut seen = Vec::new();
    while let Some(group) = acl
        .find_first_matching_entry("/doc/page.html", &Method::GET)
        .unwrap()
    {
        seen.push(group.to_string());
    }
    assert_eq!(
        seen,
        [
            "ari, timbl, robert",
            "jim, james, jonathan, jojo",
            "fallback",
        ]
    );
}

#[test]
fn grants_iterator_matches_manual_loop() {
    let text = "*.html : get,put : ari\n*.html : put : jim\n*.html : get : jojo\n";
    let mut acl = source(text);
    let path = "/doc/page.html";
    let principals: Vec<String> = acl
        .grants(path, &Method::PUT)
        .map(|group| group.unwrap().to_string())
        .collect();
    assert_eq!(principals, ["ari", "jim"]);
}

#[test]
fn full_entry_returns_whole_method_set() {
    let mut acl = source("*.html : GET,PUT : alice\n");
    let entry = acl.find_full_entry("/a/index.html").unwrap().unwrap();
    let expected: MethodSet = [Method::GET, Method::PUT].into_iter().collect();
    assert_eq!(entry.methods(), &expected);
    assert_eq!(entry.template(), "*.html");
    assert_eq!(entry.group(), &group("alice"));
}

#[test]
fn full_entry_ignores_method_interest_and_normalizes() {
    let mut acl = source("*.txt : head, delete, Head : alice\n");
    let entry = acl.find_full_entry("notes.txt").unwrap().unwrap();
    let methods: Vec<&str> = entry.methods().iter().map(Method::as_str).collect();
    assert_eq!(methods, ["HEAD", "DELETE"]);
}

#[test]
fn full_entry_enumeration_covers_every_template_match() {
    let text = "*.html : GET : a\n*.gif : GET : b\n*.html : PUT : c\n";
    let mut acl = source(text);
    let entries: Vec<_> = acl
        .entries("/page.html")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].line(), 1);
    assert_eq!(entries[1].line(), 3);
    let (methods, group) = entries[1].clone().into_parts();
    assert!(methods.contains(&Method::PUT));
    assert_eq!(group.to_string(), "c");
}

#[test]
fn exhaustion_is_idempotent() {
    let mut acl = source("*.html : GET : alice\n");
    assert!(acl.find_first_matching_entry("/i.html", &Method::GET).unwrap().is_some());
    for _ in 0..3 {
        assert_eq!(acl.find_first_matching_entry("/i.html", &Method::GET).unwrap(), None);
        assert!(acl.find_full_entry("/i.html").unwrap().is_none());
    }
}

#[test]
fn empty_source_is_exhausted_immediately() {
    let mut acl = source("");
    assert_eq!(acl.find_first_matching_entry("/i.html", &Method::GET).unwrap(), None);
    let mut comments = source("# nothing here\n\n");
    assert!(comments.find_full_entry("/i.html").unwrap().is_none());
}

#[test]
fn record_without_method_delimiter_is_skipped() {
    let text = "*.html\n*.html : GET : alice\n";
    let mut acl = source(text);
    let found = acl
        .find_first_matching_entry("/index.html", &Method::GET)
        .unwrap();
    assert_eq!(found, Some(group("alice")));
}

#[test]
fn record_without_principal_field_is_skipped() {
    let text = "*.html : GET\n*.html : GET : bob\n";
    let mut acl = source(text);
    let entry = acl.find_full_entry("/index.html").unwrap().unwrap();
    assert_eq!(entry.line(), 2);
    assert_eq!(entry.group(), &group("bob"));
}

#[test]
fn non_utf8_template_is_passed_over() {
    let bytes: &[u8] = b"caf\xe9.txt : GET : x\n*.html : GET : alice\n";
    let mut acl = AclSource::from_reader(bytes, TemplateMatcher::default());
    let found = acl
        .find_first_matching_entry("/d/index.html", &Method::GET)
        .unwrap();
    assert_eq!(found, Some(group("alice")));
}

#[test]
fn non_utf8_method_list_is_passed_over() {
    let bytes: &[u8] = b"*.html : G\xc9T : x\n*.html : GET : alice\n";
    let mut acl = AclSource::from_reader(bytes, TemplateMatcher::default());
    let entry = acl.find_full_entry("/d/index.html").unwrap().unwrap();
    assert_eq!(entry.line(), 2);
    assert_eq!(entry.group(), &group("alice"));
}

#[test]
fn truncated_matching_record_reports_partial_read() {
    let text = "*.gif : GET : alice\n*.html : GET";
    let mut acl = source(text);
    let error = acl
        .find_first_matching_entry("/index.html", &Method::GET)
        .unwrap_err();
    assert!(matches!(error, AclError::PartialRead { line: 2, .. }));
    assert!(error.is_read_failure());
}

#[test]
fn truncated_template_only_record_reports_partial_read() {
    let mut acl = source("*.html");
    let error = acl.find_full_entry("/index.html").unwrap_err();
    assert!(matches!(error, AclError::PartialRead { line: 1, .. }));
}

#[test]
fn truncated_non_matching_record_is_plain_exhaustion() {
    let mut acl = source("*.html : GET : alice\n*.gif : GE");
    assert!(acl.find_full_entry("/index.html").unwrap().is_some());
    assert!(acl.find_full_entry("/index.html").unwrap().is_none());
}

#[test]
fn last_record_without_newline_still_matches() {
    let mut acl = source("*.html : GET : alice");
    assert_eq!(
        acl.find_first_matching_entry("/index.html", &Method::GET).unwrap(),
        Some(group("alice"))
    );
}

#[test]
fn empty_principal_field_grants_nobody() {
    let mut acl = source("*.html : GET :\n");
    let found = acl
        .find_first_matching_entry("/index.html", &Method::GET)
        .unwrap()
        .unwrap();
    assert!(found.is_empty());
}

#[test]
fn grants_iterator_stops_after_error() {
    let mut acl = source("*.html : GET : alice\n*.html : GET");
    let path = "/index.html";
    let results: Vec<_> = acl.grants(path, &Method::GET).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(AclError::PartialRead { .. })));
}

#[test]
fn case_policy_comes_from_the_matcher() {
    let text = "*.HTML : GET : alice\n";
    let mut exact = AclSource::from_reader(text.as_bytes(), TemplateMatcher::new(CasePolicy::Sensitive));
    assert_eq!(exact.find_full_entry("/index.html").unwrap(), None);

    let mut folded = AclSource::from_reader(text.as_bytes(), TemplateMatcher::new(CasePolicy::Insensitive));
    assert!(folded.find_full_entry("/index.html").unwrap().is_some());
}

#[test]
fn results_outlive_later_calls() {
    let mut acl = source("*.html : GET : alice\n*.html : GET : bob\n");
    let first = acl
        .find_first_matching_entry("/index.html", &Method::GET)
        .unwrap()
        .unwrap();
    let second = acl
        .find_first_matching_entry("/index.html", &Method::GET)
        .unwrap()
        .unwrap();
    assert!(acl.find_first_matching_entry("/index.html", &Method::GET).unwrap().is_none());
    drop(acl);
    assert_eq!(first.to_string(), "alice");
    assert_eq!(second.to_string(), "bob");
}
