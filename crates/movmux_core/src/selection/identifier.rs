//! Manual track identifiers (`--tracks`).
//!
//! Grammar, one token per track:
//!
//! ```text
//! 3      global ordinal 3 (tracks with a stream identifier, in probe order)
//! a:1    second audio track
//! s:0!   first subtitle track, marked forced
//! ```

use std::str::FromStr;

use crate::catalog::TrackCatalog;
use crate::models::{Track, TrackType};

use super::error::{SelectionError, SelectionResult};
use super::state::SelectionState;

/// A parsed track identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackIdentifier {
    /// `None` selects from the global ordinal space.
    pub track_type: Option<TrackType>,
    pub ordinal: usize,
    pub forced: bool,
}

impl FromStr for TrackIdentifier {
    type Err = SelectionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || SelectionError::InvalidIdentifier(token.to_string());

        let (body, forced) = match token.strip_suffix('!') {
            Some(body) => (body, true),
            None => (token, false),
        };

        if let Ok(ordinal) = body.parse::<usize>() {
            return Ok(Self {
                track_type: None,
                ordinal,
                forced,
            });
        }

        let (prefix, index) = body.split_once(':').ok_or_else(invalid)?;
        let track_type = TrackType::from_prefix(prefix).ok_or_else(invalid)?;
        let ordinal = index.parse::<usize>().map_err(|_| invalid())?;

        Ok(Self {
            track_type: Some(track_type),
            ordinal,
            forced,
        })
    }
}

impl TrackIdentifier {
    /// Look the identifier up in the catalog.
    pub fn resolve<'c>(&self, catalog: &'c TrackCatalog) -> SelectionResult<&'c Track> {
        Ok(catalog.ordinal(self.track_type, self.ordinal)?)
    }
}

/// Parse a manual token, resolve it and admit the track.
///
/// Manually chosen tracks start out non-default; the default flag is
/// decided when the selection is finalized.
pub fn admit_identifier(
    state: &mut SelectionState,
    catalog: &TrackCatalog,
    token: &str,
) -> SelectionResult<()> {
    let identifier: TrackIdentifier = token.parse()?;
    let track = identifier.resolve(catalog)?;
    state.admit(track, identifier.forced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    fn catalog() -> TrackCatalog {
        TrackCatalog::new(vec![
            Track::new(TrackType::Video).with_stream_order("0"),
            Track::new(TrackType::Audio).with_stream_order("1"),
            Track::new(TrackType::Audio).with_stream_order("2"),
            Track::new(TrackType::Subtitles).with_stream_order("3"),
        ])
    }

    #[test]
    fn parses_global_ordinal() {
        let id: TrackIdentifier = "3".parse().unwrap();
        assert_eq!(
            id,
            TrackIdentifier {
                track_type: None,
                ordinal: 3,
                forced: false
            }
        );
    }

    #[test]
    fn parses_typed_ordinal_with_forced_marker() {
        let id: TrackIdentifier = "s:0!".parse().unwrap();
        assert_eq!(id.track_type, Some(TrackType::Subtitles));
        assert_eq!(id.ordinal, 0);
        assert!(id.forced);

        let id: TrackIdentifier = "2!".parse().unwrap();
        assert_eq!(id.track_type, None);
        assert!(id.forced);
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "!", "x:1", "a:", "a:-1", "-1", "a:1:2", "a1", "v:0!!", "audio:0"] {
            let err = token.parse::<TrackIdentifier>().unwrap_err();
            assert_eq!(
                err,
                SelectionError::InvalidIdentifier(token.to_string()),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn forced_marker_resolves_same_track() {
        let catalog = catalog();
        let plain: TrackIdentifier = "a:0".parse().unwrap();
        let forced: TrackIdentifier = "a:0!".parse().unwrap();

        assert_eq!(plain.resolve(&catalog).unwrap(), forced.resolve(&catalog).unwrap());
        assert!(!plain.forced);
        assert!(forced.forced);
    }

    #[test]
    fn admit_identifier_sets_forced_and_not_default() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        admit_identifier(&mut state, &catalog, "v:0").unwrap();
        admit_identifier(&mut state, &catalog, "a:1!").unwrap();

        let audio = &state.audio()[0];
        assert_eq!(audio.stream_id, "2");
        assert!(audio.is_forced);
        assert!(!audio.is_default);
    }

    #[test]
    fn admit_identifier_missing_track_is_fatal() {
        let catalog = catalog();
        let mut state = SelectionState::new();

        let err = admit_identifier(&mut state, &catalog, "s:4").unwrap_err();
        assert!(matches!(
            err,
            SelectionError::Catalog(CatalogError::TrackNotFound(_))
        ));
    }
}
