
use std::collections::HashSet;

use proptest::prelude::*;
use strategies::{
    arb_allow_list_reference, arb_blank_reference, arb_catalog, arb_policy, GenPolicy,
};
use wafplan::{CatalogError, PolicyBuilder, PolicyDocument, PolicyError, RuleCatalog};

// ---------------------------------------------------------------------------
// Invariant 1: Determinism
//
// Assembling the same inputs twice yields structurally identical documents,
// including their wire form.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn determinism(gen in arb_policy()) {
        let first = gen.assemble().expect("valid inputs must assemble");
        let second = gen.assemble().expect("valid inputs must assemble");
        prop_assert_eq!(&first, &second, "determinism violated across assemblies");
        prop_assert_eq!(
            first.to_json().unwrap(),
            second.to_json().unwrap(),
            "determinism violated on the wire"
        );
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Priority reservation
//
// The allow rule, when present, always sits at priority 0; every managed
// rule sits at its catalog index + 1, for all catalog sizes.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn priority_reservation(name in "[A-Za-z][A-Za-z0-9-]{0,30}",
                            reference in arb_allow_list_reference(),
                            catalog in arb_catalog()) {
        let document = PolicyBuilder::new(name)
            .allow_list(reference)
            .catalog(RuleCatalog::new(catalog.clone()))
            .assemble()
            .unwrap();

        prop_assert_eq!(document.rules().len(), catalog.len() + 1);
        prop_assert_eq!(document.rules()[0].name(), "WhiteList");
        prop_assert_eq!(document.rules()[0].priority(), 0);

        for (index, rule) in document.rules()[1..].iter().enumerate() {
            prop_assert_eq!(rule.priority(), index as u32 + 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Conditional omission without renumbering
//
// Without an allow-list reference no rule named "WhiteList" exists, and the
// managed rules are byte-for-byte the same as in the with-allow-list case.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn conditional_omission(gen in arb_policy(), reference in arb_allow_list_reference()) {
        let without = GenPolicy { allow_list: None, ..gen.clone() }.assemble().unwrap();
        let with = GenPolicy { allow_list: Some(reference), ..gen }.assemble().unwrap();

        prop_assert!(without.rules().iter().all(|r| r.name() != "WhiteList"));
        prop_assert_eq!(without.rules().len(), with.rules().len() - 1);
        prop_assert_eq!(without.rules(), &with.rules()[1..], "managed rules renumbered");
    }
}

// ---------------------------------------------------------------------------
// Invariants 4-6: Uniqueness, order preservation, metric naming
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn names_and_priorities_unique(gen in arb_policy()) {
        let document = gen.assemble().unwrap();

        let mut names = HashSet::new();
        let mut priorities = HashSet::new();
        for rule in document.rules() {
            prop_assert!(names.insert(rule.name()), "duplicate name '{}'", rule.name());
            prop_assert!(
                priorities.insert(rule.priority()),
                "duplicate priority {}",
                rule.priority()
            );
        }
    }

    #[test]
    fn catalog_order_preserved(gen in arb_policy()) {
        let document = gen.assemble().unwrap();
        let managed: Vec<&str> = document
            .rules()
            .iter()
            .filter(|r| r.name() != "WhiteList")
            .map(|r| r.name())
            .collect();
        let expected: Vec<&str> = gen.catalog.iter().map(String::as_str).collect();
        prop_assert_eq!(managed, expected, "catalog relative order not preserved");
    }

    #[test]
    fn metric_name_derived_from_rule_name(gen in arb_policy()) {
        let document = gen.assemble().unwrap();
        for rule in document.rules() {
            prop_assert_eq!(rule.metric_name(), format!("{}-Metrics", rule.name()));
        }
        prop_assert_eq!(
            document.metric_name(),
            format!("{}-Metrics", document.name())
        );
    }

    #[test]
    fn priorities_strictly_increasing(gen in arb_policy()) {
        let document = gen.assemble().unwrap();
        let priorities: Vec<u32> = document.rules().iter().map(|r| r.priority()).collect();
        for pair in priorities.windows(2) {
            prop_assert!(pair[0] < pair[1], "priorities not strictly increasing: {priorities:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 7: Rejection of invalid inputs
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn empty_catalog_rejected(name in "[A-Za-z][A-Za-z0-9-]{0,30}",
                              allow_list in prop::option::of(arb_allow_list_reference())) {
        let mut builder = PolicyBuilder::new(name).catalog(RuleCatalog::new(Vec::<&str>::new()));
        if let Some(reference) = allow_list {
            builder = builder.allow_list(reference);
        }
        prop_assert_eq!(
            builder.assemble().unwrap_err(),
            PolicyError::InvalidCatalog(CatalogError::Empty)
        );
    }

    #[test]
    fn duplicated_entry_rejected(catalog in arb_catalog(), index in any::<prop::sample::Index>()) {
        let duplicated = catalog[index.index(catalog.len())].clone();
        let mut entries = catalog;
        entries.push(duplicated.clone());

        let result = PolicyBuilder::new("X")
            .catalog(RuleCatalog::new(entries))
            .assemble();
        prop_assert_eq!(
            result.unwrap_err(),
            PolicyError::InvalidCatalog(CatalogError::DuplicateName { name: duplicated })
        );
    }

    #[test]
    fn blank_reference_rejected(catalog in arb_catalog(), blank in arb_blank_reference()) {
        let result = PolicyBuilder::new("X")
            .catalog(RuleCatalog::new(catalog))
            .allow_list(blank)
            .assemble();
        prop_assert_eq!(result.unwrap_err(), PolicyError::InvalidAllowListReference);
    }
}

// ---------------------------------------------------------------------------
// Wire round trip: decode(encode(document)) is the identity.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn json_round_trip(gen in arb_policy()) {
        let document = gen.assemble().unwrap();
        let decoded = PolicyDocument::from_json(&document.to_json().unwrap()).unwrap();
        prop_assert_eq!(document, decoded);
    }
}
