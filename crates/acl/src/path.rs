use std::path::PathBuf;

use crate::AclError;

/// Filename of the per-directory ACL file.
pub const ACL_FILE_NAME: &str = ".www_acl";

const SEPARATOR: char = '/';

/// Returns the ACL file governing `resource_path`, using [`ACL_FILE_NAME`].
///
/// The ACL lives in the resource's directory: everything before the last `/`,
/// or `.` when the path has no `/`. No filesystem access takes place.
///
/// # Examples
///
/// ```
/// use acl::resolve_acl_path;
/// use std::path::Path;
///
/// assert_eq!(resolve_acl_path("/a/b/c.html").unwrap(), Path::new("/a/b/.www_acl"));
/// assert_eq!(resolve_acl_path("c.html").unwrap(), Path::new("./.www_acl"));
/// assert!(resolve_acl_path("").is_err());
/// ```
pub fn resolve_acl_path(resource_path: &str) -> Result<PathBuf, AclError> {
    resolve_with(resource_path, ACL_FILE_NAME)
}

pub(crate) fn resolve_with(resource_path: &str, acl_file_name: &str) -> Result<PathBuf, AclError> {
    if resource_path.is_empty() {
        return Err(AclError::invalid_argument("resource path is empty"));
    }

    let directory = resource_path
        .rfind(SEPARATOR)
        .map_or(".", |index| &resource_path[..index]);

    let mut acl_path = String::with_capacity(directory.len() + 1 + acl_file_name.len());
    acl_path.push_str(directory);
    acl_path.push(SEPARATOR);
    acl_path.push_str(acl_file_name);
    Ok(PathBuf::from(acl_path))
}

/// Returns the part of `resource_path` after its last `/`.
///
/// ```
/// assert_eq!(acl::base_name("/x/y/index.html"), "index.html");
/// assert_eq!(acl::base_name("index.html"), "index.html");
/// assert_eq!(acl::base_name("/x/y/"), "");
/// ```
#[must_use]
pub fn base_name(resource_path: &str) -> &str {
    resource_path
        .rfind(SEPARATOR)
        .map_or(resource_path, |index| &resource_path[index + 1..])
}
