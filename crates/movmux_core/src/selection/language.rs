//! Language-based audio selection (`--langs`).
//!
//! Each directive adds at most one audio track, the best one for its
//! language:
//!
//! - `en`  required: fails if the source has no English audio
//! - `en?` optional: silently skipped if there is none
//! - `any` the best audio track overall, only if no audio is selected yet
//! - `none` anywhere in the list disables language selection entirely
//!
//! A language that is already covered by a selected audio track (for
//! example one chosen with `--tracks`) is not added again.

use std::str::FromStr;

use crate::catalog::{CatalogError, TrackCatalog};

use super::error::{SelectionError, SelectionResult};
use super::state::SelectionState;

/// Directive that turns off language selection for the whole run.
pub const NO_LANGUAGES: &str = "none";

/// One parsed `--langs` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageDirective {
    /// Best audio overall, if no audio is selected yet.
    Any,
    /// Best audio for the language; missing is an error.
    Required(String),
    /// Best audio for the language; missing is ignored.
    Optional(String),
}

impl FromStr for LanguageDirective {
    type Err = SelectionError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code == "any" {
            return Ok(Self::Any);
        }

        match code.chars().count() {
            2 => Ok(Self::Required(code.to_string())),
            3 => code
                .strip_suffix('?')
                .map(|lang| Self::Optional(lang.to_string()))
                .ok_or_else(|| SelectionError::InvalidLanguage(code.to_string())),
            _ => Err(SelectionError::InvalidLanguage(code.to_string())),
        }
    }
}

/// Whether the directive list switches language selection off.
pub fn languages_disabled<S: AsRef<str>>(codes: &[S]) -> bool {
    codes.iter().any(|code| code.as_ref() == NO_LANGUAGES)
}

/// Apply one language directive to the selection.
pub fn admit_language(
    state: &mut SelectionState,
    catalog: &TrackCatalog,
    code: &str,
) -> SelectionResult<()> {
    let (language, optional) = match code.parse::<LanguageDirective>()? {
        LanguageDirective::Any => {
            if state.audio().is_empty() {
                let best = catalog.best_audio(None)?;
                state.admit(best, false)?;
            }
            return Ok(());
        }
        LanguageDirective::Required(language) => (language, false),
        LanguageDirective::Optional(language) => (language, true),
    };

    if let Some(existing) = state.audio_with_language(&language) {
        tracing::info!(
            "Language {} already selected by stream {}",
            language,
            existing.stream_id
        );
        return Ok(());
    }

    match catalog.best_audio(Some(&language)) {
        Ok(track) => state.admit(track, false),
        Err(CatalogError::TrackNotFound(reason)) if optional => {
            tracing::debug!("Optional language {} skipped: {}", language, reason);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompressionMode, Track, TrackType};
    use crate::selection::admit_identifier;

    fn audio(id: &str, lang: &str, channels: u32, mode: CompressionMode, rate: &str) -> Track {
        Track::new(TrackType::Audio)
            .with_stream_order(id)
            .with_language(lang)
            .with_channels(channels)
            .with_compression(mode)
            .with_bit_rate(rate)
    }

    fn catalog() -> TrackCatalog {
        TrackCatalog::new(vec![
            Track::new(TrackType::Video).with_stream_order("0"),
            audio("1", "en", 6, CompressionMode::Lossy, "640000"),
            audio("2", "en", 2, CompressionMode::Lossy, "128000"),
            audio("3", "ja", 6, CompressionMode::Lossless, "1536000"),
        ])
    }

    fn audio_ids(state: &SelectionState) -> Vec<&str> {
        state.audio().iter().map(|s| s.stream_id.as_str()).collect()
    }

    #[test]
    fn parses_directives() {
        assert_eq!("any".parse::<LanguageDirective>(), Ok(LanguageDirective::Any));
        assert_eq!(
            "en".parse::<LanguageDirective>(),
            Ok(LanguageDirective::Required("en".to_string()))
        );
        assert_eq!(
            "ja?".parse::<LanguageDirective>(),
            Ok(LanguageDirective::Optional("ja".to_string()))
        );
    }

    #[test]
    fn rejects_bad_lengths() {
        for code in ["e", "eng", "en??", "none", ""] {
            assert_eq!(
                code.parse::<LanguageDirective>(),
                Err(SelectionError::InvalidLanguage(code.to_string()))
            );
        }
    }

    #[test]
    fn none_disables_languages() {
        assert!(languages_disabled(&["en", "none"]));
        assert!(!languages_disabled(&["en", "any"]));
        assert!(!languages_disabled::<&str>(&[]));
    }

    #[test]
    fn english_then_any_selects_six_channel_track_only() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        admit_language(&mut state, &catalog, "en").unwrap();
        admit_language(&mut state, &catalog, "any").unwrap();

        assert_eq!(audio_ids(&state), vec!["1"]);
    }

    #[test]
    fn any_picks_best_overall_when_empty() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        admit_language(&mut state, &catalog, "any").unwrap();
        admit_language(&mut state, &catalog, "any").unwrap();

        assert_eq!(audio_ids(&state), vec!["3"]);
        assert!(!state.audio()[0].is_forced);
    }

    #[test]
    fn repeated_language_is_added_once() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        admit_language(&mut state, &catalog, "en").unwrap();
        admit_language(&mut state, &catalog, "en").unwrap();
        admit_language(&mut state, &catalog, "en?").unwrap();

        assert_eq!(audio_ids(&state), vec!["1"]);
    }

    #[test]
    fn manual_track_preempts_language() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        admit_identifier(&mut state, &catalog, "a:1").unwrap();
        admit_language(&mut state, &catalog, "en").unwrap();

        assert_eq!(audio_ids(&state), vec!["2"]);
    }

    #[test]
    fn optional_missing_language_is_ignored() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        admit_language(&mut state, &catalog, "xx?").unwrap();

        assert!(state.audio().is_empty());
        assert_eq!(state.iter().count(), 0);
    }

    #[test]
    fn required_missing_language_fails() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        let err = admit_language(&mut state, &catalog, "xx").unwrap_err();

        assert!(matches!(
            err,
            SelectionError::Catalog(CatalogError::TrackNotFound(_))
        ));
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn any_without_audio_fails() {
        let catalog = TrackCatalog::new(vec![Track::new(TrackType::Video).with_stream_order("0")]);
        let mut state = SelectionState::new();

        assert!(admit_language(&mut state, &catalog, "any").is_err());
    }
}
