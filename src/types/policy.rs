use std::collections::HashSet;
use std::fmt;

use super::catalog::RuleCatalog;
use super::error::{DocumentError, PolicyError};
use super::rule::{metric_name_for, RuleAction, RuleSpec, Scope};

/// Builder for constructing a [`PolicyDocument`].
///
/// Starts from the built-in managed-rule catalog with no allow list;
/// assembly validates the inputs and produces an immutable document.
///
/// # Example
///
/// ```
/// use wafplan::PolicyBuilder;
///
/// let document = PolicyBuilder::new("MyApp-WebACL")
///     .allow_list("arn:example:ipset/trusted-offices")
///     .assemble()
///     .unwrap();
///
/// assert_eq!(document.rules().len(), 10);
/// assert_eq!(document.rules()[0].name(), "WhiteList");
/// ```
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    name: String,
    allow_list: Option<String>,
    catalog: RuleCatalog,
}

impl PolicyBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            allow_list: None,
            catalog: RuleCatalog::default(),
        }
    }

    /// Name the document after a deployment resource, `{resource}-WebACL`.
    #[must_use]
    pub fn for_resource(resource: &str) -> Self {
        Self::new(format!("{resource}-WebACL"))
    }

    /// Reference an externally managed trusted-address set.
    ///
    /// When set, assembly emits an unconditional allow rule at priority 0,
    /// evaluated before every managed rule. A blank reference fails
    /// assembly with [`PolicyError::InvalidAllowListReference`]; omit the
    /// call entirely to disable the allow list.
    #[must_use]
    pub fn allow_list(mut self, reference: impl Into<String>) -> Self {
        self.allow_list = Some(reference.into());
        self
    }

    /// Replace the built-in catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: RuleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Assemble the inputs into an immutable `PolicyDocument`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if the catalog or allow-list reference is
    /// invalid.
    pub fn assemble(self) -> Result<PolicyDocument, PolicyError> {
        crate::assemble::assemble(self.name, self.allow_list.as_deref(), &self.catalog)
    }
}

/// An assembled, immutable firewall policy: ordered rules, allow-by-default
/// action, global edge scope, metrics always enabled.
///
/// Construction is the only mutation point; every constructor re-checks the
/// document invariants (non-empty rule list, unique names and priorities,
/// `{name}-Metrics` derivation, and the fixed allow-by-default action,
/// global edge scope, and enabled metrics) so an inconsistent document can
/// never be handed to the provisioning layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    name: String,
    default_action: RuleAction,
    scope: Scope,
    rules: Vec<RuleSpec>,
    metric_name: String,
    metrics_enabled: bool,
}

impl PolicyDocument {
    /// Build a document directly from a rule list, bypassing the assembler.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidPolicyDocument`] if the rules violate
    /// the document invariants.
    pub fn from_rules(name: impl Into<String>, rules: Vec<RuleSpec>) -> Result<Self, PolicyError> {
        let name = name.into();
        let metric_name = metric_name_for(&name);
        Self::from_parts(
            name,
            RuleAction::Allow,
            Scope::GlobalEdge,
            rules,
            metric_name,
            true,
        )
    }

    /// Full-field constructor used by `from_rules` and the wire decoder.
    pub(crate) fn from_parts(
        name: String,
        default_action: RuleAction,
        scope: Scope,
        rules: Vec<RuleSpec>,
        metric_name: String,
        metrics_enabled: bool,
    ) -> Result<Self, PolicyError> {
        let document = Self {
            name,
            default_action,
            scope,
            rules,
            metric_name,
            metrics_enabled,
        };
        document.validate()?;
        Ok(document)
    }

    fn validate(&self) -> Result<(), DocumentError> {
        if self.default_action != RuleAction::Allow {
            return Err(DocumentError::DefaultActionOverridden {
                action: self.default_action,
            });
        }
        if self.scope != Scope::GlobalEdge {
            return Err(DocumentError::WrongScope { scope: self.scope });
        }
        if !self.metrics_enabled {
            return Err(DocumentError::MetricsDisabled);
        }
        if self.rules.is_empty() {
            return Err(DocumentError::NoRules);
        }
        let mut names = HashSet::new();
        let mut priorities = HashSet::new();
        for rule in &self.rules {
            if !names.insert(rule.name()) {
                return Err(DocumentError::DuplicateName {
                    name: rule.name().to_owned(),
                });
            }
            if !priorities.insert(rule.priority()) {
                return Err(DocumentError::DuplicatePriority {
                    priority: rule.priority(),
                });
            }
            if !rule.metric_name_consistent() {
                return Err(DocumentError::MetricNameMismatch {
                    name: rule.name().to_owned(),
                    metric_name: rule.metric_name().to_owned(),
                });
            }
        }
        if self.metric_name != metric_name_for(&self.name) {
            return Err(DocumentError::MetricNameMismatch {
                name: self.name.clone(),
                metric_name: self.metric_name.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn default_action(&self) -> RuleAction {
        self.default_action
    }

    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    #[must_use]
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    #[must_use]
    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    #[must_use]
    pub fn metrics_enabled(&self) -> bool {
        self.metrics_enabled
    }

    /// Returns `(name, priority)` pairs in evaluation order (ascending
    /// priority, which is also emission order).
    #[must_use]
    pub fn rule_order(&self) -> Vec<(&str, u32)> {
        self.rules.iter().map(|r| (r.name(), r.priority())).collect()
    }
}

impl fmt::Display for PolicyDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolicyDocument('{}', {} rules, {:?} scope, default {:?})",
            self.name,
            self.rules.len(),
            self.scope,
            self.default_action,
        )
    }
}
