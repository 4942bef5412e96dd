use thiserror::Error;

use super::rule::{RuleAction, Scope};

/// Validation failures for a managed-rule catalog.
///
/// All conditions are detected before any rule specs are emitted; a catalog
/// that fails here never reaches priority assignment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("rule catalog is empty; at least one managed rule is required")]
    Empty,

    #[error("duplicate rule name '{name}' in catalog")]
    DuplicateName { name: String },

    #[error("rule name '{name}' is reserved for the allow-list rule")]
    ReservedName { name: String },
}

/// Invariant violations found when re-validating an assembled document.
///
/// The assembler cannot produce any of these; they can only surface when a
/// rule list is constructed by hand (or decoded from the wire) and fed to
/// [`PolicyDocument::from_rules`](super::PolicyDocument::from_rules).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("policy document has no rules")]
    NoRules,

    #[error("duplicate rule name '{name}' in policy document")]
    DuplicateName { name: String },

    #[error("duplicate priority {priority} in policy document")]
    DuplicatePriority { priority: u32 },

    #[error("metric name '{metric_name}' for rule '{name}' does not follow the '{name}-Metrics' convention")]
    MetricNameMismatch { name: String, metric_name: String },

    #[error("default action must be Allow, got {action:?}")]
    DefaultActionOverridden { action: RuleAction },

    #[error("scope must be GlobalEdge, got {scope:?}")]
    WrongScope { scope: Scope },

    #[error("per-rule metrics must be enabled")]
    MetricsDisabled,
}

/// Unified error type for policy assembly and document construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),

    #[error("allow-list reference is blank; omit it instead of passing an empty string")]
    InvalidAllowListReference,

    #[error("invalid policy document: {0}")]
    InvalidPolicyDocument(#[from] DocumentError),
}
