use acl::CasePolicy;

/// Environment variable selecting the template case policy.
pub const TEMPLATE_CASE_ENV: &str = "HTACL_TEMPLATE_CASE";

/// Environment variable overriding the ACL filename.
pub const ACL_NAME_ENV: &str = "HTACL_ACL_NAME";

/// Reads the case policy from [`TEMPLATE_CASE_ENV`].
///
/// Unset or blank yields `Ok(None)`; an unknown keyword is reported so a
/// misconfigured deployment does not silently fall back to exact matching.
pub(crate) fn env_case_policy<F>(env: &F) -> Result<Option<CasePolicy>, String>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = env(TEMPLATE_CASE_ENV) else {
        return Ok(None);
    };
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse::<CasePolicy>()
        .map(Some)
        .map_err(|error| format!("{TEMPLATE_CASE_ENV}: {error}"))
}

/// Reads the ACL filename from [`ACL_NAME_ENV`]; blank values are ignored.
pub(crate) fn env_acl_name<F>(env: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(ACL_NAME_ENV)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
