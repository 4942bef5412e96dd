use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::ManagedRuleName;

/// Name given to the allow-list rule when one is emitted.
pub const WHITELIST_RULE_NAME: &str = "WhiteList";

/// Suffix appended to a rule name to derive its metric name.
pub const METRIC_SUFFIX: &str = "-Metrics";

/// Vendor owning every managed rule group in the built-in catalog.
pub const MANAGED_RULE_VENDOR: &str = "AWS";

/// What a rule does when its match criterion fires.
///
/// Managed rules always carry [`UseRuleGroupDefault`](Self::UseRuleGroupDefault):
/// the action is delegated to the rule group's own per-rule defaults rather
/// than overridden. The allow-list rule always carries [`Allow`](Self::Allow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleAction {
    Allow,
    Block,
    Count,
    UseRuleGroupDefault,
}

/// Where a policy is evaluated.
///
/// The assembler only ever emits [`GlobalEdge`](Self::GlobalEdge) (the
/// original deployment target is a global CDN distribution); `Regional`
/// exists because the wire format distinguishes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "GLOBAL_EDGE")]
    GlobalEdge,
    #[serde(rename = "REGIONAL")]
    Regional,
}

/// What traffic a rule matches: a vendor-managed rule group, or an
/// externally managed address set. Exactly one, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchCriterion {
    #[serde(rename_all = "camelCase")]
    ManagedRuleGroup { vendor: String, name: String },
    #[serde(rename_all = "camelCase")]
    AddressSetReference { reference: String },
}

/// One entry in an assembled policy.
///
/// Built by the assembler; priorities are unique across a document and
/// lower values evaluate first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    name: String,
    priority: u32,
    action: RuleAction,
    match_criterion: MatchCriterion,
    metric_name: String,
}

impl RuleSpec {
    /// The allow-list rule: priority 0, unconditional allow of the
    /// referenced address set.
    #[must_use]
    pub fn allow_list(reference: &str) -> Self {
        Self {
            name: WHITELIST_RULE_NAME.to_owned(),
            priority: 0,
            action: RuleAction::Allow,
            match_criterion: MatchCriterion::AddressSetReference {
                reference: reference.to_owned(),
            },
            metric_name: metric_name_for(WHITELIST_RULE_NAME),
        }
    }

    /// A managed rule at the given priority, delegating to the rule
    /// group's own default actions.
    #[must_use]
    pub fn managed(rule: &ManagedRuleName, priority: u32) -> Self {
        Self {
            name: rule.as_str().to_owned(),
            priority,
            action: RuleAction::UseRuleGroupDefault,
            match_criterion: MatchCriterion::ManagedRuleGroup {
                vendor: MANAGED_RULE_VENDOR.to_owned(),
                name: rule.as_str().to_owned(),
            },
            metric_name: metric_name_for(rule.as_str()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    #[must_use]
    pub fn action(&self) -> RuleAction {
        self.action
    }

    #[must_use]
    pub fn match_criterion(&self) -> &MatchCriterion {
        &self.match_criterion
    }

    #[must_use]
    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    /// Whether the metric name follows the `{name}-Metrics` derivation.
    pub(crate) fn metric_name_consistent(&self) -> bool {
        self.metric_name == metric_name_for(&self.name)
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({:?})", self.priority, self.name, self.action)
    }
}

/// Derive the observability metric name for a rule. Pure function of the
/// rule name, so name uniqueness implies metric uniqueness.
pub(crate) fn metric_name_for(rule_name: &str) -> String {
    format!("{rule_name}{METRIC_SUFFIX}")
}
