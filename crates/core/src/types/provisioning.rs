//! Provisioning outcome reported back by the provisioning service.

use serde::{Deserialize, Serialize};

/// Outcome of a provisioning run.
///
/// Produced by the external provisioning service and consumed here only to
/// decide which message to post. Field names follow the service's camelCase
/// JSON.
///
/// ```
/// use iad_core::ProvisioningResult;
///
/// let ok = ProvisioningResult::success();
/// assert!(ok.is_success());
///
/// let failed = ProvisioningResult::failure("AccessDenied", "bad credentials");
/// assert!(!failed.is_success());
/// assert_eq!(failed.error_summary(), "AccessDenied: bad credentials");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningResult {
    /// Whether the Git repository was created.
    pub git_repo_created: bool,
    /// Whether the Jenkins pipeline was created.
    pub jenkins_pipeline_created: bool,
    /// Error code or short error name.
    #[serde(default)]
    pub error: String,
    /// Human-readable detail.
    #[serde(default)]
    pub message: String,
}

impl ProvisioningResult {
    /// A result where every resource was created.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            git_repo_created: true,
            jenkins_pipeline_created: true,
            error: String::new(),
            message: String::new(),
        }
    }

    /// A result where nothing was created.
    #[must_use]
    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            git_repo_created: false,
            jenkins_pipeline_created: false,
            error: error.into(),
            message: message.into(),
        }
    }

    /// Success requires both the repository and the pipeline.
    ///
    /// There is no partial success: one missing resource fails the run.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.git_repo_created && self.jenkins_pipeline_created
    }

    /// `error` and `message` joined with `": "`.
    #[must_use]
    pub fn error_summary(&self) -> String {
        format!("{}: {}", self.error, self.message)
    }
}
