use crate::types::{
    CatalogError, PolicyDocument, PolicyError, RuleCatalog, RuleSpec, WHITELIST_RULE_NAME,
};

/// Assemble `(allow list?, catalog)` into a validated [`PolicyDocument`].
///
/// The allow-list rule, when present, holds priority 0; managed rules take
/// `catalog index + 1`. Slot 0 stays reserved when the allow list is
/// absent, so managed priorities never renumber.
pub(crate) fn assemble(
    name: String,
    allow_list: Option<&str>,
    catalog: &RuleCatalog,
) -> Result<PolicyDocument, PolicyError> {
    catalog.validate()?;
    let allow_rule = check_allow_list(allow_list)?;
    if allow_rule.is_some() {
        check_reserved_name(catalog)?;
    }

    let managed = catalog
        .iter()
        .enumerate()
        .map(|(index, rule)| RuleSpec::managed(rule, index as u32 + 1));
    let rules: Vec<RuleSpec> = allow_rule.into_iter().chain(managed).collect();

    PolicyDocument::from_rules(name, rules)
}

/// With an allow list in play, its rule name is taken; a catalog entry
/// using it would collide. Caught here so the document's defensive
/// re-check stays unreachable from plain input.
fn check_reserved_name(catalog: &RuleCatalog) -> Result<(), PolicyError> {
    if catalog.iter().any(|r| r.as_str() == WHITELIST_RULE_NAME) {
        return Err(PolicyError::InvalidCatalog(CatalogError::ReservedName {
            name: WHITELIST_RULE_NAME.to_owned(),
        }));
    }
    Ok(())
}

/// Absent stays absent; present must be non-blank.
fn check_allow_list(allow_list: Option<&str>) -> Result<Option<RuleSpec>, PolicyError> {
    match allow_list {
        None => Ok(None),
        Some(reference) if reference.trim().is_empty() => {
            Err(PolicyError::InvalidAllowListReference)
        }
        Some(reference) => Ok(Some(RuleSpec::allow_list(reference))),
    }
}
