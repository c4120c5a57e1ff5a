//! core/media/duration.rs
//! Stream duration via Symphonia (probe + default track, no decoding).

use std::fs::File;
use std::path::Path;

use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use super::super::error::{InfoError, Result};
use super::super::types::MediaTime;

/// `Ok(None)` when the stream probes fine but doesn't report a frame count.
pub(crate) fn probe_duration(path: &Path) -> Result<Option<MediaTime>> {
    let file = File::open(path).map_err(|source| InfoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| InfoError::Media {
            path: path.to_path_buf(),
            message: format!("format probe failed: {e}"),
        })?;

    let Some(track) = probed.format.default_track() else {
        return Ok(None);
    };

    Ok(media_time_from_params(
        track.codec_params.time_base,
        track.codec_params.n_frames,
    ))
}

/// `n_frames` ticks of `numer/denom` seconds each, as `value / timescale`.
fn media_time_from_params(time_base: Option<TimeBase>, n_frames: Option<u64>) -> Option<MediaTime> {
    let tb = time_base?;
    let frames = n_frames?;

    Some(MediaTime {
        value: frames.checked_mul(u64::from(tb.numer))?,
        timescale: u64::from(tb.denom),
    })
}
