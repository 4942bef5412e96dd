mod catalog;
mod error;
mod logging;
mod policy;
mod rule;

pub use catalog::{ManagedRuleName, RuleCatalog};
pub use error::{CatalogError, DocumentError, PolicyError};
pub use logging::{LoggingConfig, LOG_GROUP_PREFIX, LOG_RETENTION_DAYS};
pub use policy::{PolicyBuilder, PolicyDocument};
pub use rule::{
    MatchCriterion, RuleAction, RuleSpec, Scope, MANAGED_RULE_VENDOR, METRIC_SUFFIX,
    WHITELIST_RULE_NAME,
};
