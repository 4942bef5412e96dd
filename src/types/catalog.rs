use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// The vendor-managed rule groups applied by default, in evaluation order.
///
/// Order is significant: each entry's position determines the priority of
/// the rule spec emitted for it. Editing this list is a content change, not
/// a logic change.
const DEFAULT_MANAGED_RULES: &[&str] = &[
    "AWSManagedRulesAdminProtectionRuleSet",
    "AWSManagedRulesAmazonIpReputationList",
    "AWSManagedRulesAnonymousIpList",
    "AWSManagedRulesCommonRuleSet",
    "AWSManagedRulesKnownBadInputsRuleSet",
    "AWSManagedRulesLinuxRuleSet",
    "AWSManagedRulesPHPRuleSet",
    "AWSManagedRulesUnixRuleSet",
    "AWSManagedRulesSQLiRuleSet",
];

/// Opaque identifier of a vendor-supplied protection rule group.
///
/// The crate never checks that the name corresponds to a real rule group;
/// that lookup happens in the provisioning layer at apply time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManagedRuleName(String);

impl ManagedRuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ManagedRuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ManagedRuleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ManagedRuleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An ordered list of managed rule group names.
///
/// [`RuleCatalog::default()`] is the built-in catalog every policy starts
/// from; [`PolicyBuilder::catalog()`](super::PolicyBuilder::catalog) swaps
/// in a replacement. A catalog must be non-empty and duplicate-free to
/// assemble, enforced by [`validate()`](Self::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalog {
    entries: Vec<ManagedRuleName>,
}

impl RuleCatalog {
    pub fn new<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ManagedRuleName>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the catalog invariants: non-empty, no duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] or [`CatalogError::DuplicateName`].
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: entry.as_str().to_owned(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManagedRuleName> {
        self.entries.iter()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_MANAGED_RULES.iter().copied())
    }
}

impl fmt::Display for RuleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleCatalog({} rules)", self.entries.len())
    }
}
