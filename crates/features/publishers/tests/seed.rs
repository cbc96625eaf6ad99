use plist_publishers::seed::load_seed;
use plist_publishers::{Catalog, PublisherError};
use std::fs;
use tempfile::tempdir;

#[test]
fn seed_file_is_parsed_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"[
            {"publisher": "A", "domains": [{"domain": "a.com", "desktopAds": {"top": true}, "mobileAds": 2}]},
            {"publisher": "B", "domains": []},
            {"publisher": "C"}
        ]"#,
    )
    .unwrap();

    let publishers = load_seed(&path).unwrap();
    let names: Vec<_> = publishers.iter().map(|p| p.publisher.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(publishers[2].domains.is_empty());

    let catalog = Catalog::from_snapshot(publishers).unwrap();
    assert_eq!(catalog.owner_of("a.com"), Some("A"));
}

#[test]
fn missing_seed_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_seed(&dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, PublisherError::SeedIo { .. }));
    assert!(err.to_string().contains("absent.json"), "unexpected error: {err}");
}

#[test]
fn non_array_seed_is_a_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, r#"{"publisher": "A"}"#).unwrap();

    let err = load_seed(&path).unwrap_err();
    assert!(matches!(err, PublisherError::SeedFormat { .. }));
}
