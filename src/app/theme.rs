use serde::{Deserialize, Serialize};

/// The binary display preference. Persisted as the literal strings `light`
/// and `dark` under the settings key `theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

/// Ordered resolution: stored preference wins, otherwise the platform's
/// ambient signal, otherwise light. The signal is only consulted when
/// nothing is stored.
pub fn resolve(
    stored: Option<ThemePreference>,
    prefers_dark: impl FnOnce() -> bool,
) -> ThemePreference {
    match stored {
        Some(preference) => preference,
        None if prefers_dark() => ThemePreference::Dark,
        None => ThemePreference::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        for preference in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(preference.toggled().toggled(), preference);
            assert_ne!(preference.toggled(), preference);
        }
    }

    #[test]
    fn test_stored_preference_wins_over_ambient() {
        assert_eq!(
            resolve(Some(ThemePreference::Light), || true),
            ThemePreference::Light
        );
        assert_eq!(
            resolve(Some(ThemePreference::Dark), || false),
            ThemePreference::Dark
        );
    }

    #[test]
    fn test_ambient_signal_used_when_nothing_stored() {
        assert_eq!(resolve(None, || true), ThemePreference::Dark);
        assert_eq!(resolve(None, || false), ThemePreference::Light);
    }

    #[test]
    fn test_ambient_signal_not_consulted_when_stored() {
        let resolved = resolve(Some(ThemePreference::Light), || {
            panic!("ambient signal should not be probed")
        });
        assert_eq!(resolved, ThemePreference::Light);
    }

    #[test]
    fn test_serializes_as_lowercase_literals() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::Dark).unwrap(),
            "\"dark\""
        );
        let parsed: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemePreference::Light);
    }
}
