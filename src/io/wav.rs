//! 16-bit PCM WAV output.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::debug;

use crate::{
    ambient::{
        params::{BYTES_PER_SAMPLE, CHANNELS},
        StereoBuffer,
    },
    dsp::amplify::to_pcm_i16,
    error::{AmbientError, Result},
};

/*
Canonical 44-byte header
========================

  offset  size  field
  ------  ----  ----------------------------------------
       0     4  "RIFF"
       4     4  36 + data size
       8     4  "WAVE"
      12     4  "fmt "
      16     4  16 (fmt chunk size)
      20     2  1 (linear PCM)
      22     2  channels
      24     4  sample rate
      28     4  byte rate   = sample rate × block align
      32     2  block align = channels × bytes per sample
      34     2  bits per sample
      36     4  "data"
      40     4  data size
      44        interleaved little-endian samples, L R L R ...

hound writes this plain PCM layout for ≤2 channels at 16 bits.
*/

pub const HEADER_LEN: u64 = 44;

pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BYTES_PER_SAMPLE * 8,
        sample_format: SampleFormat::Int,
    }
}

/// Total file size for a stereo 16-bit WAV of `frames` frames.
pub fn expected_file_len(frames: usize) -> u64 {
    HEADER_LEN + frames as u64 * CHANNELS as u64 * BYTES_PER_SAMPLE as u64
}

/// Quantize and interleave `buffer` into any seekable writer.
pub fn write_wav<W: Write + Seek>(writer: W, buffer: &StereoBuffer) -> Result<()> {
    let mut wav = WavWriter::new(writer, wav_spec(buffer.sample_rate))?;
    for (left, right) in buffer.frames_iter() {
        wav.write_sample(to_pcm_i16(left))?;
        wav.write_sample(to_pcm_i16(right))?;
    }
    wav.finalize()?;
    Ok(())
}

/// Encode `buffer` as a complete WAV file in memory.
pub fn encode_wav(buffer: &StereoBuffer) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(expected_file_len(buffer.frames()) as usize);
    write_wav(Cursor::new(&mut bytes), buffer)?;
    Ok(bytes)
}

/// Sibling path the file is staged at before being renamed into place.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}

/// Write `buffer` to `path`, replacing any existing file.
///
/// The file is staged next to the target and renamed on success, so a failed
/// run never leaves a truncated WAV where the player expects a good one.
/// Returns the size of the written file in bytes.
pub fn write_wav_file(path: &Path, buffer: &StereoBuffer) -> Result<u64> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(AmbientError::MissingOutputDir(parent.to_path_buf()));
        }
    }

    let staging = staging_path(path);
    debug!(staging = %staging.display(), "writing staged WAV");

    let written = File::create(&staging)
        .map_err(AmbientError::from)
        .and_then(|file| write_wav(BufWriter::new(file), buffer))
        .and_then(|()| Ok(fs::rename(&staging, path)?));

    if let Err(err) = written {
        // Best effort; the original error is what matters
        let _ = fs::remove_file(&staging);
        return Err(err);
    }

    Ok(fs::metadata(path)?.len())
}
