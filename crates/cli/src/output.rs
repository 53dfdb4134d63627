//! Rendering of lookup results.

use std::io::{self, Write};
use std::path::Path;

use acl::{AclEntry, GroupDef, Method, MethodSet};
use serde::Serialize;

use crate::OutputFormat;

/// One JSON line per returned record.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    acl: Option<String>,
    line: usize,
    template: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<&'a Method>,
    methods: &'a MethodSet,
    principals: Vec<&'a str>,
    group: &'a GroupDef,
}

/// Writes `entry` in `format`.
///
/// Without `--full` only the principal list is printed in text form, since
/// the template and method are implied by the query.
pub(crate) fn write_entry<W: Write>(
    out: &mut W,
    format: OutputFormat,
    acl_path: Option<&Path>,
    entry: &AclEntry,
    requested: Option<&Method>,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => match requested {
            Some(_) => writeln!(out, "{}", entry.group()),
            None => writeln!(out, "{entry}"),
        },
        OutputFormat::Json => {
            let record = JsonEntry {
                acl: acl_path.map(|path| path.display().to_string()),
                line: entry.line(),
                template: entry.template(),
                method: requested,
                methods: entry.methods(),
                principals: entry.group().principals().collect(),
                group: entry.group(),
            };
            serde_json::to_writer(&mut *out, &record).map_err(io::Error::from)?;
            writeln!(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acl::{AclSource, TemplateMatcher};

    fn entry(text: &str) -> AclEntry {
        AclSource::from_reader(text.as_bytes(), TemplateMatcher::default())
            .find_full_entry("/srv/index.html")
            .expect("scan")
            .expect("entry")
    }

    fn render(entry: &AclEntry, format: OutputFormat, requested: Option<&Method>) -> String {
        let mut out = Vec::new();
        write_entry(&mut out, format, Some(Path::new("/srv/.www_acl")), entry, requested)
            .expect("write");
        String::from_utf8(out).expect("utf-8")
    }

    #[test]
    fn text_first_match_prints_principals() {
        let entry = entry("*.html : get, put : alice, (bob, carol)@lab\n");
        let text = render(&entry, OutputFormat::Text, Some(&Method::GET));
        assert_eq!(text, "alice, (bob, carol)@lab\n");
    }

    #[test]
    fn text_full_entry_prints_whole_record() {
        let entry = entry("*.html : get, put : alice\n");
        let text = render(&entry, OutputFormat::Text, None);
        assert_eq!(text, "*.html : GET, PUT : alice\n");
    }

    #[test]
    fn json_carries_location_and_principals() {
        let entry = entry("\n*.html : get, put : alice, bob@10.0.0.1\n");
        let text = render(&entry, OutputFormat::Json, Some(&Method::PUT));
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).expect("json");

        assert_eq!(value["acl"], "/srv/.www_acl");
        assert_eq!(value["line"], 2);
        assert_eq!(value["template"], "*.html");
        assert_eq!(value["method"], "PUT");
        assert_eq!(value["methods"], serde_json::json!(["GET", "PUT"]));
        assert_eq!(value["principals"], serde_json::json!(["alice", "bob"]));
        assert_eq!(value["group"]["items"][1]["addresses"], serde_json::json!(["10.0.0.1"]));
    }

    #[test]
    fn json_full_entry_omits_method() {
        let entry = entry("*.html : GET : alice\n");
        let text = render(&entry, OutputFormat::Json, None);
        assert!(!text.contains("\"method\":"));
        assert!(text.ends_with('\n'));
    }
}
