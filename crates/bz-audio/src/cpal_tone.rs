//! CPAL-based square-wave tone output.

use bz_engine::ToneOutput;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Stream, StreamConfig};
use log::{error, warn};
use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::{HeapCons, HeapProd, HeapRb};

use crate::error::AudioError;
use crate::square::SquareOscillator;

/// Commands posted from the player to the audio callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToneCommand {
    Start(u16),
    Stop,
}

/// Pending commands the ring can hold before new ones are dropped.
const COMMAND_CAPACITY: usize = 64;

/// Square-wave tone on the default output device.
///
/// `start`/`stop` never block: they post a [`ToneCommand`] into a
/// lock-free ring that the device callback drains before rendering each
/// buffer. The stream lives as long as this value.
pub struct CpalTone {
    _stream: Stream,
    producer: HeapProd<ToneCommand>,
    sample_rate: u32,
}

impl CpalTone {
    /// Open the default output device and start a silent stream.
    pub fn new(amplitude: i16) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoDevice)?;

        let config: StreamConfig = device
            .default_output_config()
            .map_err(|e| AudioError::DeviceInit(e.to_string()))?
            .into();
        let sample_rate = config.sample_rate.0;
        let channels = config.channels as usize;

        let (producer, consumer) = HeapRb::<ToneCommand>::new(COMMAND_CAPACITY).split();
        let oscillator = SquareOscillator::new(sample_rate, amplitude);
        let mut callback = ToneCallback { consumer, oscillator };

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| callback.render(data, channels),
                |err| error!("audio stream error: {}", err),
                None,
            )
            .map_err(|e| AudioError::StreamCreate(e.to_string()))?;

        stream.play().map_err(|e| AudioError::Playback(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            producer,
            sample_rate,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn post(&mut self, command: ToneCommand) {
        if self.producer.try_push(command).is_err() {
            warn!("tone command ring full, dropped {:?}", command);
        }
    }
}

impl ToneOutput for CpalTone {
    fn start(&mut self, freq_hz: u16) {
        self.post(ToneCommand::Start(freq_hz));
    }

    fn stop(&mut self) {
        self.post(ToneCommand::Stop);
    }
}

/// State owned by the device callback.
struct ToneCallback {
    consumer: HeapCons<ToneCommand>,
    oscillator: SquareOscillator,
}

impl ToneCallback {
    fn render(&mut self, data: &mut [f32], channels: usize) {
        while let Some(command) = self.consumer.try_pop() {
            match command {
                ToneCommand::Start(hz) => self.oscillator.start(hz),
                ToneCommand::Stop => self.oscillator.stop(),
            }
        }

        for chunk in data.chunks_mut(channels.max(1)) {
            let sample = self.oscillator.next_sample() as f32 / 32768.0;
            for out in chunk.iter_mut() {
                *out = sample;
            }
        }
    }
}
