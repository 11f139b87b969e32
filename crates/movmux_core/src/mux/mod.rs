//! Muxing command synthesis.
//!
//! # Architecture
//!
//! - **plan**: Turns a finalized selection into a backend-neutral `StreamPlan`
//! - **keep_list**: Formats a plan as mkvmerge options
//! - **map_list**: Formats a plan as ffmpeg options
//!
//! Both backends read only the plan, so for one selection they keep the
//! same streams, in the same order, with the same default/forced flags.

mod command;
mod keep_list;
mod map_list;
mod plan;

pub use command::{format_tokens_pretty, MuxCommand};
pub use keep_list::KeepListBuilder;
pub use map_list::MapListBuilder;
pub use plan::{PlannedStream, StreamPlan};

use std::path::Path;

use crate::models::MuxerKind;

/// Build the command for the chosen backend.
///
/// `program` is the executable to run (name or path).
pub fn synthesize(
    kind: MuxerKind,
    program: &str,
    plan: &StreamPlan,
    input_path: &Path,
    output_path: &Path,
) -> MuxCommand {
    let args = match kind {
        MuxerKind::KeepList => KeepListBuilder::new(plan, input_path, output_path).build(),
        MuxerKind::MapList => MapListBuilder::new(plan, input_path, output_path).build(),
    };
    MuxCommand::new(program, args)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::catalog::TrackCatalog;
    use crate::models::{Track, TrackType};
    use crate::selection::{admit_identifier, admit_language, SelectionState};

    /// (stream id, default, forced) as seen by the muxer.
    type Marking = (String, bool, bool);

    fn value_after<'a>(args: &'a [String], option: &str) -> Vec<&'a str> {
        args.windows(2)
            .filter(|pair| pair[0] == option)
            .map(|pair| pair[1].as_str())
            .collect()
    }

    fn flag_map(values: Vec<&str>) -> HashMap<String, bool> {
        values
            .into_iter()
            .map(|value| {
                let (id, flag) = value.split_once(':').unwrap();
                (id.to_string(), flag == "yes")
            })
            .collect()
    }

    fn decode_keep_list(args: &[String]) -> Vec<Marking> {
        let defaults = flag_map(value_after(args, "--default-track-flag"));
        let forced = flag_map(value_after(args, "--forced-display-flag"));

        value_after(args, "--track-order")[0]
            .split(',')
            .map(|entry| {
                let id = entry.strip_prefix("0:").unwrap().to_string();
                (id.clone(), defaults[&id], forced[&id])
            })
            .collect()
    }

    fn decode_map_list(args: &[String]) -> Vec<Marking> {
        value_after(args, "-map")
            .into_iter()
            .enumerate()
            .map(|(index, map)| {
                let id = map.strip_prefix("0:").unwrap().to_string();
                let disposition = value_after(args, &format!("-disposition:{}", index))[0];
                let flags: Vec<&str> = disposition.split('+').collect();
                (id, flags.contains(&"default"), flags.contains(&"forced"))
            })
            .collect()
    }

    fn catalog() -> TrackCatalog {
        TrackCatalog::new(vec![
            Track::new(TrackType::Video).with_stream_order("0"),
            Track::new(TrackType::Video).with_stream_order("1"),
            Track::new(TrackType::Audio)
                .with_stream_order("2")
                .with_language("en")
                .with_channels(2),
            Track::new(TrackType::Audio)
                .with_stream_order("3")
                .with_language("ja")
                .with_channels(6),
            Track::new(TrackType::Subtitles).with_stream_order("4"),
            Track::new(TrackType::Subtitles).with_stream_order("5"),
        ])
    }

    fn plan_for(tracks: &[&str], langs: &[&str]) -> StreamPlan {
        let catalog = catalog();
        let mut state = SelectionState::new();
        for token in tracks {
            admit_identifier(&mut state, &catalog, token).unwrap();
        }
        for code in langs {
            admit_language(&mut state, &catalog, code).unwrap();
        }
        StreamPlan::from_selection(&state.finalize(&catalog).unwrap())
    }

    fn both(plan: &StreamPlan) -> (Vec<Marking>, Vec<Marking>) {
        let input = Path::new("in.mkv");
        let output = Path::new("out.mkv");
        let keep = synthesize(MuxerKind::KeepList, "mkvmerge", plan, input, output);
        let map = synthesize(MuxerKind::MapList, "ffmpeg", plan, input, output);
        (decode_keep_list(&keep.args), decode_map_list(&map.args))
    }

    #[test]
    fn backends_agree_on_streams_and_flags() {
        let selections: [(&[&str], &[&str]); 5] = [
            (&[], &["any"]),
            (&["v:1", "s:1!", "a:0"], &["ja"]),
            (&["5!", "4", "1"], &[]),
            (&["a:1!", "v:0", "v:1"], &["en?", "xx?"]),
            (&[], &[]),
        ];

        for (tracks, langs) in selections {
            let plan = plan_for(tracks, langs);
            let (keep, map) = both(&plan);

            assert_eq!(keep, map, "tracks {:?} langs {:?}", tracks, langs);
            assert_eq!(keep.len(), plan.streams().len());
        }
    }

    #[test]
    fn forced_manual_audio_becomes_default_at_synthesis() {
        let plan = plan_for(&["v:0", "a:1!"], &[]);
        let (keep, _) = both(&plan);

        assert_eq!(
            keep,
            vec![
                ("0".to_string(), true, false),
                ("3".to_string(), true, true),
            ]
        );
    }

    #[test]
    fn synthesize_uses_configured_program() {
        let plan = plan_for(&[], &[]);
        let cmd = synthesize(
            MuxerKind::MapList,
            "/opt/ffmpeg/bin/ffmpeg",
            &plan,
            Path::new("in.mkv"),
            Path::new("out.mkv"),
        );

        assert_eq!(cmd.program, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(cmd.args.last().map(String::as_str), Some("out.mkv"));
    }
}
