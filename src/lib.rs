mod adapter;
mod assemble;
mod serial;
mod types;

pub use adapter::{ProvisionedAcl, ProvisioningAdapter};
pub use serial::DeserializeError;
pub use types::{
    CatalogError, DocumentError, LoggingConfig, ManagedRuleName, MatchCriterion, PolicyBuilder,
    PolicyDocument, PolicyError, RuleAction, RuleCatalog, RuleSpec, Scope, LOG_GROUP_PREFIX,
    LOG_RETENTION_DAYS, MANAGED_RULE_VENDOR, METRIC_SUFFIX, WHITELIST_RULE_NAME,
};
