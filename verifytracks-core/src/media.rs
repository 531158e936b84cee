//! Stream metadata as reported by ffprobe.
//!
//! ffprobe's `-show_streams -print_format json` output is deserialized into
//! typed structures here, then validated into [`StreamDescriptor`] values.
//! Only the fields verification needs are read; everything else is ignored.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Kind of media carried by a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecType {
    Audio,
    Video,
    /// Subtitles, data, attachments and anything else.
    #[serde(other)]
    Other,
}

/// One stream of a media container.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamDescriptor {
    /// Stream index as reported by the probe (position in the output when absent).
    pub index: usize,
    pub codec_type: CodecType,
    pub codec_name: Option<String>,
    /// Duration in seconds, if the probe reported one.
    pub duration_secs: Option<f64>,
}

impl StreamDescriptor {
    /// Duration converted to whole milliseconds, truncating any fraction.
    #[must_use]
    pub fn duration_ms(&self) -> Option<u64> {
        self.duration_secs.map(seconds_to_ms)
    }
}

/// Converts seconds to milliseconds by truncation (no rounding).
#[must_use]
pub fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds * 1000.0) as u64
}

// ---- Raw ffprobe JSON shape ----

#[derive(Debug, Deserialize)]
struct RawProbeOutput {
    streams: Vec<RawStream>,
}

#[derive(Debug, Deserialize)]
struct RawStream {
    index: Option<usize>,
    codec_type: Option<CodecType>,
    codec_name: Option<String>,
    duration: Option<RawDuration>,
}

/// ffprobe prints durations as strings, but numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Number(f64),
    Text(String),
}

impl RawDuration {
    fn to_seconds(&self, index: usize) -> CoreResult<f64> {
        let (seconds, shown) = match self {
            RawDuration::Number(n) => (Some(*n), n.to_string()),
            RawDuration::Text(text) => (text.trim().parse::<f64>().ok(), text.clone()),
        };
        match seconds {
            Some(s) if s.is_finite() && s >= 0.0 => Ok(s),
            _ => Err(CoreError::InvalidDuration {
                index,
                value: shown,
            }),
        }
    }
}

/// Parses raw ffprobe JSON output into stream descriptors, in probe order.
///
/// Fails with [`CoreError::ProbeOutput`] if the output is not JSON or has no
/// `streams` array, with [`CoreError::MissingStreamField`] if a stream has no
/// `codec_type`, and with [`CoreError::InvalidDuration`] if a duration is not
/// a non-negative number of seconds.
pub fn parse_streams(output: &[u8]) -> CoreResult<Vec<StreamDescriptor>> {
    let raw: RawProbeOutput = serde_json::from_slice(output)
        .map_err(|e| CoreError::ProbeOutput(format!("ffprobe output deserialization: {e}")))?;

    raw.streams
        .into_iter()
        .enumerate()
        .map(|(position, stream)| {
            let index = stream.index.unwrap_or(position);
            let codec_type = stream.codec_type.ok_or(CoreError::MissingStreamField {
                index,
                field: "codec_type",
            })?;
            let duration_secs = stream
                .duration
                .as_ref()
                .map(|d| d.to_seconds(index))
                .transpose()?;

            Ok(StreamDescriptor {
                index,
                codec_type,
                codec_name: stream.codec_name,
                duration_secs,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typical_ffprobe_output() {
        let json = br#"{
            "streams": [
                {"index": 0, "codec_name": "h264", "codec_type": "video", "duration": "10.010000"},
                {"index": 1, "codec_name": "aac", "codec_type": "audio", "duration": "10.005333"},
                {"index": 2, "codec_name": "subrip", "codec_type": "subtitle"}
            ]
        }"#;

        let streams = parse_streams(json).unwrap();
        assert_eq!(streams.len(), 3);
        assert_eq!(streams[0].codec_type, CodecType::Video);
        assert_eq!(streams[0].codec_name.as_deref(), Some("h264"));
        assert_eq!(streams[0].duration_ms(), Some(10010));
        assert_eq!(streams[1].codec_type, CodecType::Audio);
        assert_eq!(streams[1].duration_ms(), Some(10005));
        assert_eq!(streams[2].codec_type, CodecType::Other);
        assert_eq!(streams[2].duration_secs, None);
    }

    #[test]
    fn test_numeric_and_string_durations_agree() {
        let text = parse_streams(br#"{"streams": [{"codec_type": "audio", "duration": "13.5"}]}"#)
            .unwrap();
        let number =
            parse_streams(br#"{"streams": [{"codec_type": "audio", "duration": 13.5}]}"#).unwrap();
        assert_eq!(text[0].duration_ms(), Some(13500));
        assert_eq!(text, number);
    }

    #[test]
    fn test_index_defaults_to_position() {
        let streams = parse_streams(
            br#"{"streams": [{"codec_type": "video"}, {"codec_type": "audio"}]}"#,
        )
        .unwrap();
        assert_eq!(streams[0].index, 0);
        assert_eq!(streams[1].index, 1);
    }

    #[test]
    fn test_duration_is_truncated_not_rounded() {
        assert_eq!(seconds_to_ms(1.9999), 1999);
        assert_eq!(seconds_to_ms(0.0), 0);
        assert_eq!(seconds_to_ms(5.4), 5400);
    }

    #[test]
    fn test_missing_streams_array_is_malformed() {
        let err = parse_streams(br#"{"format": {}}"#).unwrap_err();
        assert!(matches!(err, CoreError::ProbeOutput(_)));
    }

    #[test]
    fn test_non_json_is_malformed() {
        let err = parse_streams(b"Invalid data found when processing input").unwrap_err();
        assert!(matches!(err, CoreError::ProbeOutput(_)));

        let err = parse_streams(b"").unwrap_err();
        assert!(matches!(err, CoreError::ProbeOutput(_)));
    }

    #[test]
    fn test_missing_codec_type_is_reported() {
        let err = parse_streams(br#"{"streams": [{"index": 3, "codec_name": "aac"}]}"#).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingStreamField {
                index: 3,
                field: "codec_type"
            }
        ));
    }

    #[test]
    fn test_invalid_durations_are_rejected() {
        for bad in [r#""abc""#, r#""-1.0""#, "-2.5"] {
            let json = format!(r#"{{"streams": [{{"codec_type": "audio", "duration": {bad}}}]}}"#);
            let err = parse_streams(json.as_bytes()).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidDuration { index: 0, .. }),
                "expected InvalidDuration for {bad}, got {err:?}"
            );
        }
    }
}
