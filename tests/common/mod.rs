//! Shared test utilities for generating raw PCM sample streams.

use std::fs;
use std::path::Path;

/// Audio pattern types for test generation
#[derive(Debug, Clone, Copy)]
pub enum AudioPattern {
    /// Pure sine wave at specified frequency (Hz)
    Sine(f32),
    /// Digital silence (all zeros)
    Silence,
    /// White noise (reproducible xorshift samples)
    WhiteNoise,
}

/// Configuration for raw PCM test input
#[derive(Debug, Clone)]
pub struct RawPcmConfig {
    pub channels: u16,
    pub sample_rate: u32,
    pub duration_secs: f32,
    pub pattern: AudioPattern,
    /// Amplitude multiplier (0.0 to 1.0, where 1.0 = max i16)
    pub amplitude: f32,
}

impl Default for RawPcmConfig {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 44100,
            duration_secs: 0.25,
            pattern: AudioPattern::Sine(440.0),
            amplitude: 0.6,
        }
    }
}

impl RawPcmConfig {
    pub fn mono(mut self) -> Self {
        self.channels = 1;
        self
    }

    #[allow(dead_code)]
    pub fn sample_rate(mut self, rate: u32) -> Self {
        self.sample_rate = rate;
        self
    }

    #[allow(dead_code)]
    pub fn duration(mut self, secs: f32) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn pattern(mut self, pattern: AudioPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Render interleaved little-endian 16-bit PCM bytes.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn to_bytes(&self) -> Vec<u8> {
        let total_samples = (self.sample_rate as f32 * self.duration_secs) as u32;
        let max_amplitude = i16::MAX as f32 * self.amplitude;
        let mut bytes =
            Vec::with_capacity(total_samples as usize * self.channels as usize * 2);

        // Simple PRNG for reproducible "random" noise (xorshift)
        let mut rng_state: u32 = 0xDEAD_BEEF;
        let mut next_random = || {
            rng_state ^= rng_state << 13;
            rng_state ^= rng_state >> 17;
            rng_state ^= rng_state << 5;
            // Convert to -1.0 to 1.0 range
            (rng_state as f32 / u32::MAX as f32).mul_add(2.0, -1.0)
        };

        for i in 0..total_samples {
            let t = i as f32 / self.sample_rate as f32;

            let sample_value = match self.pattern {
                AudioPattern::Sine(freq) => {
                    (t * freq * 2.0 * std::f32::consts::PI).sin() * max_amplitude
                }
                AudioPattern::Silence => 0.0,
                AudioPattern::WhiteNoise => next_random() * max_amplitude,
            };

            let sample = sample_value.round() as i16;
            for _ in 0..self.channels {
                bytes.extend_from_slice(&sample.to_le_bytes());
            }
        }

        bytes
    }

    /// Write the raw PCM bytes to a specific path.
    pub fn write_to_path(&self, path: &Path) {
        fs::write(path, self.to_bytes()).expect("Failed to write raw PCM");
    }
}

/// Convenience functions for common test scenarios
pub mod presets {
    use super::*;

    /// Standard test input: quarter-second stereo 44.1kHz sine wave
    pub fn standard() -> RawPcmConfig {
        RawPcmConfig::default()
    }

    /// Digital silence
    #[allow(dead_code)]
    pub fn silence() -> RawPcmConfig {
        RawPcmConfig::default().pattern(AudioPattern::Silence)
    }

    /// Reproducible white noise
    pub fn noise() -> RawPcmConfig {
        RawPcmConfig::default().pattern(AudioPattern::WhiteNoise)
    }

    /// Mono sine at 22050 Hz
    pub fn mono_22k() -> RawPcmConfig {
        RawPcmConfig::default()
            .mono()
            .sample_rate(22050)
            .pattern(AudioPattern::Sine(440.0))
    }
}
