//! Classification of probed streams into audio and video tracks.

use crate::config::VerifyConfig;
use crate::error::{CoreError, CoreResult};
use crate::media::{CodecType, StreamDescriptor};

/// Audio and video track durations of one file, in probe stream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackSet {
    /// Durations of counted video tracks, in milliseconds.
    pub video_ms: Vec<u64>,
    /// Durations of audio tracks, in milliseconds.
    pub audio_ms: Vec<u64>,
}

impl TrackSet {
    /// Partitions `streams` into audio and video tracks.
    ///
    /// Video streams whose codec is excluded by `config` (still images such
    /// as cover art) are skipped, as are streams of any other type. Counted
    /// streams must carry a duration, and video streams a codec name.
    pub fn classify(streams: &[StreamDescriptor], config: &VerifyConfig) -> CoreResult<Self> {
        let mut tracks = TrackSet::default();

        for stream in streams {
            match stream.codec_type {
                CodecType::Audio => tracks.audio_ms.push(required_duration_ms(stream)?),
                CodecType::Video => {
                    let codec_name =
                        stream
                            .codec_name
                            .as_deref()
                            .ok_or(CoreError::MissingStreamField {
                                index: stream.index,
                                field: "codec_name",
                            })?;
                    if config.is_excluded_video_codec(codec_name) {
                        log::debug!(
                            "Skipping still-image stream #{} ({codec_name})",
                            stream.index
                        );
                        continue;
                    }
                    tracks.video_ms.push(required_duration_ms(stream)?);
                }
                CodecType::Other => {}
            }
        }

        Ok(tracks)
    }

    /// Duration of the primary video track: the first counted video stream
    /// in probe order.
    #[must_use]
    pub fn primary_video_ms(&self) -> Option<u64> {
        self.video_ms.first().copied()
    }

    /// Largest absolute difference between any audio track and the primary
    /// video track. `None` when either side is missing.
    #[must_use]
    pub fn max_deviation_ms(&self) -> Option<u64> {
        let primary = self.primary_video_ms()?;
        self.audio_ms
            .iter()
            .map(|&audio| audio.abs_diff(primary))
            .max()
    }
}

fn required_duration_ms(stream: &StreamDescriptor) -> CoreResult<u64> {
    stream.duration_ms().ok_or(CoreError::MissingStreamField {
        index: stream.index,
        field: "duration",
    })
}
