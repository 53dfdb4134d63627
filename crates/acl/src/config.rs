use std::fs::File;
use std::io;
use std::path::PathBuf;

use template::{CasePolicy, TemplateMatcher};

use crate::path::resolve_with;
use crate::{ACL_FILE_NAME, AclError, AclSource, debug_acl};

/// Deployment settings for ACL lookups.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AclConfig {
    acl_file_name: String,
    case_policy: CasePolicy,
}

impl Default for AclConfig {
    fn default() -> Self {
        Self {
            acl_file_name: ACL_FILE_NAME.to_owned(),
            case_policy: CasePolicy::default(),
        }
    }
}

impl AclConfig {
    /// Creates the default configuration: `.www_acl`, case-sensitive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-directory ACL filename.
    #[must_use]
    pub fn with_acl_file_name(mut self, name: impl Into<String>) -> Self {
        self.acl_file_name = name.into();
        self
    }

    /// Sets how templates treat letter case.
    #[must_use]
    pub const fn with_case_policy(mut self, policy: CasePolicy) -> Self {
        self.case_policy = policy;
        self
    }

    /// Returns the per-directory ACL filename.
    #[must_use]
    pub fn acl_file_name(&self) -> &str {
        &self.acl_file_name
    }

    /// Returns the template case policy.
    #[must_use]
    pub const fn case_policy(&self) -> CasePolicy {
        self.case_policy
    }

    /// Checks that the filename is a single, non-empty path component.
    pub fn validate(&self) -> Result<(), AclError> {
        let name = self.acl_file_name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains('/') {
            return Err(AclError::invalid_argument(format!(
                "ACL file name '{name}' must be a single path component"
            )));
        }
        Ok(())
    }
}

/// Entry point bound to one [`AclConfig`].
#[derive(Clone, Debug, Default)]
pub struct AclResolver {
    config: AclConfig,
}

impl AclResolver {
    /// Validates `config` and builds a resolver from it.
    pub fn new(config: AclConfig) -> Result<Self, AclError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &AclConfig {
        &self.config
    }

    /// Returns a matcher using the configured case policy.
    #[must_use]
    pub const fn matcher(&self) -> TemplateMatcher {
        TemplateMatcher::new(self.config.case_policy)
    }

    /// Returns the ACL file governing `resource_path`.
    pub fn acl_path(&self, resource_path: &str) -> Result<PathBuf, AclError> {
        resolve_with(resource_path, &self.config.acl_file_name)
    }

    /// Opens the ACL file governing `resource_path`.
    ///
    /// Returns `Ok(None)` when the file does not exist, meaning no
    /// directory-specific rules apply. Any other failure to open is an
    /// [`AclError::Io`].
    pub fn open(&self, resource_path: &str) -> Result<Option<AclSource>, AclError> {
        let path = self.acl_path(resource_path)?;
        match File::open(&path) {
            Ok(file) => {
                debug_acl::trace_acl_opened(&path);
                Ok(Some(AclSource::from_file(file, path, self.matcher())))
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug_acl::trace_acl_absent(&path);
                Ok(None)
            }
            Err(source) => Err(AclError::Io {
                path: Some(path),
                source,
            }),
        }
    }
}
