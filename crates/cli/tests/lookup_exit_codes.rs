//! End-to-end runs of the command against ACL trees on disk.

use cli::{ExitStatus, run};
use test_support::AclTree;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let argv = std::iter::once("htacl").chain(args.iter().copied());
    let code = run(argv, &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout is UTF-8"),
        String::from_utf8(stderr).expect("stderr is UTF-8"),
    )
}

const ACL: &str = "\
# document root rules
*.html : get,put : ari,timbl,robert
*.gif  : get     : everybody
*.html : get     : (jim, james)@*.cern.ch
";

#[test]
fn each_exit_status_is_reachable() {
    let tree = AclTree::new();
    tree.write_acl("www", ACL);
    tree.write_acl("broken", "*.html : get");

    let found = run_args(&[&tree.resource("www/page.html")]);
    assert_eq!(found.0, ExitStatus::Found.code());
    assert_eq!(found.1, "ari, timbl, robert\n");

    let none = run_args(&["-m", "DELETE", &tree.resource("www/page.html")]);
    assert_eq!(none.0, ExitStatus::NoMatch.code());

    let absent = run_args(&[&tree.resource("elsewhere/page.html")]);
    assert_eq!(absent.0, ExitStatus::NoMatch.code());

    let usage = run_args(&["--method"]);
    assert_eq!(usage.0, ExitStatus::Usage.code());

    let failure = run_args(&[&tree.resource("broken/page.html")]);
    assert_eq!(failure.0, ExitStatus::ReadFailure.code());
    assert!(failure.2.contains(".www_acl"));
}

#[test]
fn enumeration_follows_file_order() {
    let tree = AclTree::new();
    tree.write_acl("", ACL);
    let (code, stdout, _) = run_args(&["--all", &tree.resource("page.html")]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "ari, timbl, robert\n(jim, james)@*.cern.ch\n");
}

#[test]
fn resources_are_matched_by_base_name() {
    let tree = AclTree::new();
    tree.write_acl("img", ACL);
    let (code, stdout, _) = run_args(&["--full", &tree.resource("img/logo.gif")]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "*.gif : GET : everybody\n");
}
