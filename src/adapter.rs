use std::fmt;

use crate::types::{LoggingConfig, PolicyDocument};

/// Contract for the external layer that turns a [`PolicyDocument`] into
/// live infrastructure.
///
/// Implementations must reconcile the live firewall resource to match the
/// document exactly (idempotently; the crate does not care whether by full
/// replace or diff-and-patch) and route access events to the destination
/// named by the [`LoggingConfig`]. The crate ships no implementation.
pub trait ProvisioningAdapter {
    type Error;

    /// Create or update the live resource and its logging pipeline.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the core never retries or interprets them.
    fn apply(
        &mut self,
        document: &PolicyDocument,
        logging: &LoggingConfig,
    ) -> Result<ProvisionedAcl, Self::Error>;
}

/// Identifiers returned by a successful [`ProvisioningAdapter::apply`].
///
/// Opaque pass-through values for downstream consumers; never parsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedAcl {
    web_acl_id: String,
    web_acl_arn: String,
}

impl ProvisionedAcl {
    pub fn new(web_acl_id: impl Into<String>, web_acl_arn: impl Into<String>) -> Self {
        Self {
            web_acl_id: web_acl_id.into(),
            web_acl_arn: web_acl_arn.into(),
        }
    }

    #[must_use]
    pub fn web_acl_id(&self) -> &str {
        &self.web_acl_id
    }

    #[must_use]
    pub fn web_acl_arn(&self) -> &str {
        &self.web_acl_arn
    }
}

impl fmt::Display for ProvisionedAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.web_acl_id, self.web_acl_arn)
    }
}
