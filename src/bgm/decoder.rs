// SPDX-License-Identifier: MPL-2.0
//! Audio file decoding and conversion to the output device format.
//!
//! [`Track`] reads packets with symphonia and yields interleaved `f32`
//! chunks. [`Converter`] remixes the channels and resamples linearly so the
//! chunks can be queued on the device as they are.

use crate::error::{Error, Result};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Sample rate and channel count of interleaved PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

/// Interleaved samples decoded from one packet.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub format: PcmFormat,
    pub samples: Vec<f32>,
}

/// The first audio track of a music file, read front to back.
pub struct Track {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
}

impl Track {
    /// Probes `path` and prepares a decoder for its first audio track.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, its container is not
    /// recognized, or it holds no decodable audio track.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let stream = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(extension);
        }

        let probed = symphonia::default::get_probe().format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;
        let format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|track| track.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| Error::Audio(format!("{} has no audio track", path.display())))?;
        let track_id = track.id;
        let decoder =
            symphonia::default::get_codecs().make(&track.codec_params, &DecoderOptions::default())?;

        Ok(Self {
            format,
            decoder,
            track_id,
        })
    }

    /// Decodes the next packet of the track. `None` at the end of the file.
    ///
    /// Corrupt packets are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error on read failures or unrecoverable decoder errors.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>> {
        loop {
            let packet = match self.format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(err))
                    if err.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    return Ok(None);
                }
                Err(err) => return Err(err.into()),
            };
            if packet.track_id() != self.track_id {
                continue;
            }

            match self.decoder.decode(&packet) {
                Ok(decoded) => {
                    let spec = *decoded.spec();
                    let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                    buffer.copy_interleaved_ref(decoded);
                    return Ok(Some(Chunk {
                        format: PcmFormat {
                            sample_rate: spec.rate,
                            channels: spec.channels.count() as u16,
                        },
                        samples: buffer.samples().to_vec(),
                    }));
                }
                Err(SymphoniaError::DecodeError(err)) => {
                    log::debug!("skipping corrupt audio packet: {}", err);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// Maps interleaved frames from `from` channels to `to` channels.
///
/// Mono is averaged from all input channels; otherwise output channel `c`
/// takes input channel `c % from`.
#[must_use]
pub fn remix(samples: &[f32], from: u16, to: u16) -> Vec<f32> {
    let from = usize::from(from.max(1));
    let to = usize::from(to.max(1));
    if from == to {
        return samples.to_vec();
    }
    samples
        .chunks_exact(from)
        .flat_map(|frame| {
            (0..to).map(move |channel| {
                if to == 1 {
                    frame.iter().sum::<f32>() / from as f32
                } else {
                    frame[channel % from]
                }
            })
        })
        .collect()
}

/// Streaming channel remix plus linear resampling.
///
/// The last frame of each chunk is carried into the next one, so output is
/// continuous across chunk boundaries (one frame of latency).
#[derive(Debug, Clone)]
pub struct Converter {
    input: PcmFormat,
    output: PcmFormat,
    /// Input frames advanced per output frame.
    step: f64,
    /// Read position; 0.0 is the carried frame, 1.0 the first new frame.
    position: f64,
    previous: Vec<f32>,
}

impl Converter {
    #[must_use]
    pub fn new(input: PcmFormat, output: PcmFormat) -> Self {
        Self {
            input,
            output,
            step: f64::from(input.sample_rate.max(1)) / f64::from(output.sample_rate.max(1)),
            position: 1.0,
            previous: vec![0.0; usize::from(output.channels.max(1))],
        }
    }

    #[must_use]
    pub fn input(&self) -> PcmFormat {
        self.input
    }

    /// Converts one chunk of input samples to the output format.
    pub fn process(&mut self, samples: &[f32]) -> Vec<f32> {
        let frames = remix(samples, self.input.channels, self.output.channels);
        let channels = self.previous.len();
        let count = frames.len() / channels;
        if count == 0 {
            return Vec::new();
        }

        let mut out = Vec::with_capacity((count as f64 / self.step) as usize * channels + channels);
        while self.position < count as f64 {
            let index = self.position.floor();
            let fraction = (self.position - index) as f32;
            let index = index as usize;
            let before = frame_at(&frames, &self.previous, index);
            let after = &frames[index * channels..(index + 1) * channels];
            out.extend(
                before
                    .iter()
                    .zip(after)
                    .map(|(a, b)| a + (b - a) * fraction),
            );
            self.position += self.step;
        }

        self.position -= count as f64;
        self.previous
            .copy_from_slice(&frames[(count - 1) * channels..count * channels]);
        out
    }
}

/// Frame `index - 1` of `frames`, where frame -1 is the carried frame.
fn frame_at<'a>(frames: &'a [f32], previous: &'a [f32], index: usize) -> &'a [f32] {
    let channels = previous.len();
    if index == 0 {
        previous
    } else {
        &frames[(index - 1) * channels..index * channels]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MONO_8K: PcmFormat = PcmFormat {
        sample_rate: 8_000,
        channels: 1,
    };

    /// Writes a 16-bit PCM WAV file with `frames` frames of a constant level.
    fn write_wav(path: &Path, format: PcmFormat, frames: usize) {
        let block_align = 2 * u32::from(format.channels);
        let data_len = frames as u32 * block_align;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&format.channels.to_le_bytes());
        bytes.extend_from_slice(&format.sample_rate.to_le_bytes());
        bytes.extend_from_slice(&(format.sample_rate * block_align).to_le_bytes());
        bytes.extend_from_slice(&(block_align as u16).to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        for _ in 0..frames * usize::from(format.channels) {
            bytes.extend_from_slice(&8_192i16.to_le_bytes());
        }
        std::fs::write(path, bytes).expect("failed to write wav");
    }

    #[test]
    fn wav_track_decodes_every_frame() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("bgm.wav");
        write_wav(&path, MONO_8K, 800);

        let mut track = Track::open(&path).expect("wav should open");
        let mut total = 0;
        while let Some(chunk) = track.next_chunk().expect("wav should decode") {
            assert_eq!(chunk.format, MONO_8K);
            assert!(chunk.samples.iter().all(|s| (s - 0.25).abs() < 1e-3));
            total += chunk.samples.len();
        }
        assert_eq!(total, 800);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = Track::open(&dir.path().join("bgm.mp3"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn garbage_file_is_an_audio_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("bgm.mp3");
        std::fs::write(&path, b"definitely not audio").expect("failed to write file");
        assert!(Track::open(&path).is_err());
    }

    #[test]
    fn remix_mono_to_stereo_duplicates() {
        assert_eq!(remix(&[0.1, 0.2], 1, 2), vec![0.1, 0.1, 0.2, 0.2]);
    }

    #[test]
    fn remix_stereo_to_mono_averages() {
        let mono = remix(&[0.2, 0.4, -1.0, 1.0], 2, 1);
        assert_eq!(mono.len(), 2);
        assert!((mono[0] - 0.3).abs() < 1e-6);
        assert_eq!(mono[1], 0.0);
    }

    #[test]
    fn same_rate_passes_frames_through_with_one_frame_delay() {
        let mut converter = Converter::new(MONO_8K, MONO_8K);
        assert_eq!(converter.process(&[1.0, 2.0, 3.0]), vec![1.0, 2.0]);
        assert_eq!(converter.process(&[4.0, 5.0]), vec![3.0, 4.0]);
    }

    #[test]
    fn downsampling_halves_the_frame_count() {
        let output = PcmFormat {
            sample_rate: 4_000,
            channels: 1,
        };
        let mut converter = Converter::new(MONO_8K, output);
        let input: Vec<f32> = (0..400).map(|i| i as f32).collect();
        let first = converter.process(&input[..200]);
        let second = converter.process(&input[200..]);
        assert_eq!(first.len() + second.len(), 200);
        assert_eq!(first[1], 2.0);
    }

    #[test]
    fn upsampling_interpolates_between_frames() {
        let output = PcmFormat {
            sample_rate: 16_000,
            channels: 1,
        };
        let mut converter = Converter::new(MONO_8K, output);
        let out = converter.process(&[0.0, 1.0, 2.0]);
        assert_eq!(out, vec![0.0, 0.5, 1.0, 1.5]);
    }
}
