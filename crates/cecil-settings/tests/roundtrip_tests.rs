//! Export/import round trips for arbitrary records

use cecil_fs::NormalizedPath;
use cecil_settings::{CecilSettings, ResetStaticMode, SETTINGS_VERSION};
use proptest::prelude::*;
use rstest::rstest;

fn mode() -> impl Strategy<Value = ResetStaticMode> {
    prop::sample::select(ResetStaticMode::ALL.to_vec())
}

/// Printable text, biased towards placeholder tokens.
fn template() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "\\PC*",
        prop::collection::vec(
            prop::sample::select(vec![
                "%class%",
                "%method%",
                "%parameters%",
                "%value%",
                "%old_value%",
                "%new_value%",
                "%milliseconds%",
                "%ticks%",
                "%property%",
                " ",
                "::",
                "'\"\\",
            ]),
            0..8
        )
        .prop_map(|parts| parts.concat()),
    ]
}

prop_compose! {
    fn settings()(
        (include_reset_static_in_build, include_logs_in_build, include_timed_in_build)
            in (any::<bool>(), any::<bool>(), any::<bool>()),
        reset_static_mode in mode(),
        formats in prop::collection::vec(template(), 8)
    ) -> CecilSettings {
        let [
            method_log_format,
            parameters_separator,
            property_get_log_format,
            property_set_log_format,
            timed_method_format,
            timed_property_get_format,
            timed_property_set_format,
            mark_in_profiler_format,
        ]: [String; 8] = formats.try_into().unwrap();

        CecilSettings {
            version: SETTINGS_VERSION,
            include_reset_static_in_build,
            reset_static_mode,
            include_logs_in_build,
            method_log_format,
            parameters_separator,
            property_get_log_format,
            property_set_log_format,
            include_timed_in_build,
            timed_method_format,
            timed_property_get_format,
            timed_property_set_format,
            mark_in_profiler_format,
        }
    }
}

proptest! {
    #[test]
    fn toml_export_then_import_is_identity(record in settings()) {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("settings.toml"));

        record.export_to(&path).unwrap();
        let imported = CecilSettings::import_from(&path).unwrap();

        prop_assert_eq!(imported, record);
    }

    #[test]
    fn json_export_then_import_is_identity(record in settings()) {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("settings.json"));

        record.export_to(&path).unwrap();
        let imported = CecilSettings::import_from(&path).unwrap();

        prop_assert_eq!(imported, record);
    }
}

#[rstest]
#[case("settings.toml")]
#[case("settings.json")]
#[case("settings.yaml")]
fn test_every_mode_round_trips(#[case] file_name: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join(file_name));

    for mode in ResetStaticMode::ALL {
        let record = CecilSettings {
            reset_static_mode: mode,
            parameters_separator: String::new(),
            ..CecilSettings::default()
        };

        record.export_to(&path).unwrap();
        assert_eq!(CecilSettings::import_from(&path).unwrap(), record);
    }
}
