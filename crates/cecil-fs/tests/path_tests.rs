use cecil_fs::NormalizedPath;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("a/../b", "b")]
#[case("../a", "../a")]
#[case("../../a/b", "../../a/b")]
#[case("a/../../b", "../b")]
#[case("/a/b/../../c", "/c")]
#[case("a\\..\\b", "b")]
#[case("a/./b//c", "a/b/c")]
#[case("//server/share/x", "//server/share/x")]
fn test_normalization(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[test]
fn test_join_builds_settings_path() {
    let root = NormalizedPath::new("/projects/game");
    let path = root
        .join("ProjectSettings")
        .join("Packages/se.hertzole.cecilattributes")
        .join("CecilAttributesSettings.toml");

    assert_eq!(
        path.as_str(),
        "/projects/game/ProjectSettings/Packages/se.hertzole.cecilattributes/CecilAttributesSettings.toml"
    );
    assert_eq!(path.file_name(), Some("CecilAttributesSettings.toml"));
    assert_eq!(path.extension(), Some("toml"));
    assert_eq!(
        path.parent().unwrap().as_str(),
        "/projects/game/ProjectSettings/Packages/se.hertzole.cecilattributes"
    );
}

#[test]
fn test_network_path_detection() {
    assert!(NormalizedPath::new("//server/share").is_network_path());
    assert!(NormalizedPath::new(r"\\server\share").is_network_path());
    assert!(!NormalizedPath::new("/local/path").is_network_path());
}

proptest! {
    #[test]
    fn normalized_paths_have_no_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn normalization_is_idempotent(s in "\\PC*") {
        let once = NormalizedPath::new(&s);
        let twice = NormalizedPath::new(once.to_native());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn join_with_empty_segment_is_identity(a in "[a-z/]*") {
        let base = NormalizedPath::new(&a);
        prop_assert_eq!(base.join(""), base.clone());
        prop_assert_eq!(base.join("."), base);
    }
}
