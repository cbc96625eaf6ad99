use plist_publishers::{Catalog, Domain, Publisher, PublisherError};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use serde_json::{Value, json};

fn ads() -> impl Strategy<Value = Value> {
    prop_oneof![Just(Value::Null), any::<i32>().prop_map(|n| json!(n)), "[a-z]{0,6}".prop_map(Value::from)]
}

fn domain_named(name: String) -> impl Strategy<Value = Domain> {
    (ads(), ads()).prop_map(move |(desktop, mobile)| Domain::new(name.clone(), desktop, mobile))
}

proptest! {
    #[test]
    fn distinct_publishers_are_listed_in_insertion_order(names in btree_set("[a-z]{1,8}", 1..12)) {
        let mut catalog = Catalog::new();
        let names: Vec<String> = names.into_iter().collect();
        for name in &names {
            catalog.add_publisher(Publisher::new(name.clone(), vec![])).unwrap();
        }

        let listed: Vec<&str> = catalog.publishers().iter().map(|p| p.publisher.as_str()).collect();
        prop_assert_eq!(listed, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_publisher_leaves_catalog_unchanged(
        name in "[a-z]{1,8}",
        domains in btree_set("[a-z]{1,8}\\.com", 0..5),
    ) {
        let domains: Vec<Domain> =
            domains.into_iter().map(|d| Domain::new(d, Value::Null, Value::Null)).collect();
        let mut catalog = Catalog::from_snapshot(vec![Publisher::new(name.clone(), domains)]).unwrap();
        let before = catalog.publishers().to_vec();
        let indexed = catalog.domain_count();

        let err = catalog.add_publisher(Publisher::new(name, vec![])).unwrap_err();
        let rejected = matches!(err, PublisherError::PublisherExists { .. });
        prop_assert!(rejected);
        prop_assert_eq!(catalog.publishers(), before.as_slice());
        prop_assert_eq!(catalog.domain_count(), indexed);
    }

    #[test]
    fn duplicate_domain_reports_its_owner(
        owners in btree_set("[A-Z][a-z]{0,5}", 2..6),
        pick in any::<prop::sample::Index>(),
        target in any::<prop::sample::Index>(),
    ) {
        let owners: Vec<String> = owners.into_iter().collect();
        let publishers = owners
            .iter()
            .map(|o| Publisher::new(o.clone(), vec![Domain::new(format!("{o}.com"), json!(1), json!(1))]))
            .collect();
        let mut catalog = Catalog::from_snapshot(publishers).unwrap();

        let owner = pick.get(&owners);
        let requester = target.get(&owners);
        let err = catalog
            .add_domain(requester, Domain::new(format!("{owner}.com"), json!(2), json!(2)))
            .unwrap_err();

        prop_assert_eq!(err.owner(), Some(owner.as_str()));
        prop_assert_eq!(catalog.domain_count(), owners.len());
    }

    #[test]
    fn identical_update_is_rejected(domain in "[a-z]{1,8}".prop_flat_map(domain_named)) {
        let mut catalog = Catalog::from_snapshot(vec![Publisher::new("A", vec![domain.clone()])]).unwrap();

        let err = catalog.update_domain(&domain, domain.clone()).unwrap_err();
        let rejected = matches!(err, PublisherError::NoEdit { .. });
        prop_assert!(rejected);
        prop_assert_eq!(&catalog.publishers()[0].domains, &vec![domain]);
    }

    #[test]
    fn rename_keeps_index_and_store_in_step(
        domains in vec(ads(), 1..6),
        pick in any::<prop::sample::Index>(),
        desktop in ads(),
        mobile in ads(),
    ) {
        let domains: Vec<Domain> = domains
            .into_iter()
            .enumerate()
            .map(|(i, ads)| Domain::new(format!("d{i}.com"), ads.clone(), ads))
            .collect();
        let original = pick.get(&domains).clone();
        let mut catalog = Catalog::from_snapshot(vec![Publisher::new("A", domains.clone())]).unwrap();

        let renamed = Domain::new(format!("renamed-{}", original.domain), desktop, mobile);
        catalog.update_domain(&original, renamed.clone()).unwrap();

        prop_assert_eq!(catalog.owner_of(&original.domain), None);
        prop_assert_eq!(catalog.owner_of(&renamed.domain), Some("A"));
        prop_assert_eq!(catalog.domain_count(), domains.len());

        let stored = &catalog.publishers()[0].domains;
        prop_assert_eq!(stored.len(), domains.len());
        prop_assert!(stored.contains(&renamed));
        for name in stored.iter().map(|d| &d.domain) {
            prop_assert_eq!(catalog.owner_of(name), Some("A"));
        }
    }
}
