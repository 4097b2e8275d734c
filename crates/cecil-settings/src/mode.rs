//! Startup hook point for generated static-reset methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// When during player startup the generated static-reset method runs.
///
/// Mirrors the engine's runtime initialization load types. The settings
/// store treats these as an opaque closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResetStaticMode {
    /// After the first scene has loaded.
    AfterSceneLoad,
    /// Before the first scene loads, after objects are deserialized.
    BeforeSceneLoad,
    /// Once all assemblies are loaded and preloaded assets initialized.
    AfterAssembliesLoaded,
    /// Before the splash screen is shown.
    BeforeSplashScreen,
    /// Earliest hook, during subsystem registration.
    #[default]
    SubsystemRegistration,
}

impl ResetStaticMode {
    /// Every variant, in engine order.
    pub const ALL: [ResetStaticMode; 5] = [
        ResetStaticMode::AfterSceneLoad,
        ResetStaticMode::BeforeSceneLoad,
        ResetStaticMode::AfterAssembliesLoaded,
        ResetStaticMode::BeforeSplashScreen,
        ResetStaticMode::SubsystemRegistration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResetStaticMode::AfterSceneLoad => "after-scene-load",
            ResetStaticMode::BeforeSceneLoad => "before-scene-load",
            ResetStaticMode::AfterAssembliesLoaded => "after-assemblies-loaded",
            ResetStaticMode::BeforeSplashScreen => "before-splash-screen",
            ResetStaticMode::SubsystemRegistration => "subsystem-registration",
        }
    }
}

impl FromStr for ResetStaticMode {
    type Err = Error;

    /// Accepts kebab-case, snake_case and PascalCase, ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match squashed.as_str() {
            "aftersceneload" => Ok(ResetStaticMode::AfterSceneLoad),
            "beforesceneload" => Ok(ResetStaticMode::BeforeSceneLoad),
            "afterassembliesloaded" => Ok(ResetStaticMode::AfterAssembliesLoaded),
            "beforesplashscreen" => Ok(ResetStaticMode::BeforeSplashScreen),
            "subsystemregistration" => Ok(ResetStaticMode::SubsystemRegistration),
            _ => Err(Error::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ResetStaticMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_is_subsystem_registration() {
        assert_eq!(ResetStaticMode::default(), ResetStaticMode::SubsystemRegistration);
    }

    #[rstest]
    #[case("after-scene-load", ResetStaticMode::AfterSceneLoad)]
    #[case("BeforeSceneLoad", ResetStaticMode::BeforeSceneLoad)]
    #[case("after_assemblies_loaded", ResetStaticMode::AfterAssembliesLoaded)]
    #[case("BEFORE-SPLASH-SCREEN", ResetStaticMode::BeforeSplashScreen)]
    #[case("SubsystemRegistration", ResetStaticMode::SubsystemRegistration)]
    fn test_from_str(#[case] input: &str, #[case] expected: ResetStaticMode) {
        assert_eq!(input.parse::<ResetStaticMode>().unwrap(), expected);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "on-demand".parse::<ResetStaticMode>().unwrap_err();
        assert!(err.to_string().contains("on-demand"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in ResetStaticMode::ALL {
            assert_eq!(mode.to_string().parse::<ResetStaticMode>().unwrap(), mode);
        }
    }
}
