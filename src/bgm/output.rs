// SPDX-License-Identifier: MPL-2.0
//! Background music through the default audio output device.
//!
//! A feeder thread decodes the track into a bounded buffer and the cpal
//! stream drains it. Pausing stops the drain. Muting keeps draining into
//! silence, so a muted autoplay advances through the track like an unmuted
//! one.

use super::decoder::{Converter, PcmFormat, Track};
use super::{PlayRefused, Playback, PlaybackEvent};
use crate::config::BGM_BUFFER_MS;
use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long the feeder sleeps when the buffer is full.
const FEED_WAIT: Duration = Duration::from_millis(20);

/// State shared between the update loop, the feeder thread and the
/// audio callback.
pub(crate) struct Shared {
    buffer: Mutex<VecDeque<f32>>,
    capacity: usize,
    paused: AtomicBool,
    muted: AtomicBool,
    stop: AtomicBool,
}

impl Shared {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
            paused: AtomicBool::new(true),
            muted: AtomicBool::new(true),
            stop: AtomicBool::new(false),
        }
    }

    pub(crate) fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    pub(crate) fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
    }

    fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    fn buffered(&self) -> usize {
        self.buffer.lock().map_or(0, |buffer| buffer.len())
    }

    /// Appends `samples`, waiting while the buffer is full. Returns `false`
    /// once the backend is shutting down.
    pub(crate) fn push(&self, samples: &[f32]) -> bool {
        let mut rest = samples;
        while !rest.is_empty() {
            if self.is_stopped() {
                return false;
            }
            let written = match self.buffer.lock() {
                Ok(mut buffer) => {
                    let room = self.capacity.saturating_sub(buffer.len()).min(rest.len());
                    buffer.extend(rest[..room].iter().copied());
                    room
                }
                Err(_) => return false,
            };
            rest = &rest[written..];
            if !rest.is_empty() {
                thread::sleep(FEED_WAIT);
            }
        }
        true
    }

    /// Writes the next samples into a device buffer.
    ///
    /// Paused output is silent and leaves the buffer untouched. Muted output
    /// is silent but consumes samples. Missing samples are silence.
    pub(crate) fn fill<T: cpal::Sample + cpal::FromSample<f32>>(&self, data: &mut [T]) {
        let silence = T::from_sample(0.0f32);
        if self.paused.load(Ordering::Relaxed) {
            data.fill(silence);
            return;
        }
        let Ok(mut buffer) = self.buffer.lock() else {
            data.fill(silence);
            return;
        };
        let muted = self.muted.load(Ordering::Relaxed);
        for sample in data.iter_mut() {
            *sample = match buffer.pop_front() {
                Some(value) if !muted => T::from_sample(value.clamp(-1.0, 1.0)),
                _ => silence,
            };
        }
    }
}

/// Plays one music file on the default output device.
pub struct DevicePlayback {
    path: PathBuf,
    repeat: bool,
    format: PcmFormat,
    shared: Arc<Shared>,
    feeder: Option<JoinHandle<()>>,
    events_tx: Sender<PlaybackEvent>,
    events_rx: Receiver<PlaybackEvent>,
    /// Kept alive for the lifetime of the backend.
    _stream: cpal::Stream,
}

impl fmt::Debug for DevicePlayback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevicePlayback")
            .field("path", &self.path)
            .field("repeat", &self.repeat)
            .field("format", &self.format)
            .finish()
    }
}

impl DevicePlayback {
    /// Opens the default output device for the music file at `path`.
    ///
    /// The output stream starts paused; decoding begins on the first play
    /// request.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, no output device is
    /// available, or the output stream cannot be started.
    pub fn open(path: &Path, repeat: bool) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::Audio(format!("{} not found", path.display())));
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Audio("no audio output device found".to_string()))?;
        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Audio(format!("failed to get audio config: {e}")))?;

        let format = PcmFormat {
            sample_rate: supported_config.sample_rate().0,
            channels: supported_config.channels(),
        };
        let capacity = (u64::from(format.sample_rate) * u64::from(format.channels) * BGM_BUFFER_MS
            / 1000) as usize;
        let shared = Arc::new(Shared::new(capacity));
        let (events_tx, events_rx) = mpsc::channel();

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(
                &device,
                &supported_config.into(),
                Arc::clone(&shared),
                events_tx.clone(),
            )?,
            cpal::SampleFormat::I16 => build_stream::<i16>(
                &device,
                &supported_config.into(),
                Arc::clone(&shared),
                events_tx.clone(),
            )?,
            cpal::SampleFormat::U16 => build_stream::<u16>(
                &device,
                &supported_config.into(),
                Arc::clone(&shared),
                events_tx.clone(),
            )?,
            other => {
                return Err(Error::Audio(format!(
                    "unsupported audio sample format {other:?}"
                )))
            }
        };
        stream
            .play()
            .map_err(|e| Error::Audio(format!("failed to start audio stream: {e}")))?;

        log::info!(
            "background music {} on {} Hz / {} channels",
            path.display(),
            format.sample_rate,
            format.channels
        );

        Ok(Self {
            path: path.to_path_buf(),
            repeat,
            format,
            shared,
            feeder: None,
            events_tx,
            events_rx,
            _stream: stream,
        })
    }

    fn ensure_feeder(&mut self) -> std::result::Result<(), PlayRefused> {
        if self.feeder.as_ref().is_some_and(|feeder| !feeder.is_finished()) {
            return Ok(());
        }
        let path = self.path.clone();
        let repeat = self.repeat;
        let format = self.format;
        let shared = Arc::clone(&self.shared);
        let events = self.events_tx.clone();
        let feeder = thread::Builder::new()
            .name("bgm-feeder".to_string())
            .spawn(move || feed(&path, repeat, format, &shared, &events))
            .map_err(|e| PlayRefused(format!("failed to start decoder: {e}")))?;
        self.feeder = Some(feeder);
        Ok(())
    }
}

impl Playback for DevicePlayback {
    fn play(&mut self, muted: bool) -> std::result::Result<(), PlayRefused> {
        self.shared.set_muted(muted);
        self.ensure_feeder()?;
        self.shared.set_paused(false);
        Ok(())
    }

    fn pause(&mut self) {
        self.shared.set_paused(true);
    }

    fn poll_event(&mut self) -> Option<PlaybackEvent> {
        self.events_rx.try_recv().ok()
    }
}

impl Drop for DevicePlayback {
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::Relaxed);
        if let Some(feeder) = self.feeder.take() {
            if feeder.join().is_err() {
                log::error!("background music decoder panicked");
            }
        }
    }
}

fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    shared: Arc<Shared>,
    events: Sender<PlaybackEvent>,
) -> Result<cpal::Stream> {
    let error_shared = Arc::clone(&shared);
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| shared.fill(data),
            move |err| {
                log::error!("audio output error: {err}");
                error_shared.set_paused(true);
                let _ = events.send(PlaybackEvent::Paused);
            },
            None,
        )
        .map_err(|e| Error::Audio(format!("failed to build audio stream: {e}")))
}

/// Feeder thread body: decodes the track (again and again when repeating)
/// until the backend shuts down.
fn feed(
    path: &Path,
    repeat: bool,
    format: PcmFormat,
    shared: &Shared,
    events: &Sender<PlaybackEvent>,
) {
    loop {
        match feed_once(path, format, shared) {
            Ok(true) if repeat => log::debug!("background music restarting"),
            Ok(true) => {
                while shared.buffered() > 0 && !shared.is_stopped() {
                    thread::sleep(FEED_WAIT);
                }
                shared.set_paused(true);
                let _ = events.send(PlaybackEvent::Ended);
                return;
            }
            Ok(false) => return,
            Err(err) => {
                log::error!("background music stopped: {}", err);
                shared.set_paused(true);
                let _ = events.send(PlaybackEvent::Paused);
                return;
            }
        }
    }
}

/// Decodes the whole track into the buffer. `Ok(true)` at the end of the
/// track, `Ok(false)` when interrupted by shutdown.
pub(crate) fn feed_once(path: &Path, output: PcmFormat, shared: &Shared) -> Result<bool> {
    let mut track = Track::open(path)?;
    let mut converter: Option<Converter> = None;
    let mut produced = 0usize;

    while let Some(chunk) = track.next_chunk()? {
        if converter
            .as_ref()
            .is_none_or(|converter| converter.input() != chunk.format)
        {
            converter = Some(Converter::new(chunk.format, output));
        }
        let Some(converter) = converter.as_mut() else {
            continue;
        };
        let samples = converter.process(&chunk.samples);
        produced += samples.len();
        if !shared.push(&samples) {
            return Ok(false);
        }
    }

    if produced == 0 {
        return Err(Error::Audio(format!("{} holds no audio", path.display())));
    }
    Ok(true)
}
