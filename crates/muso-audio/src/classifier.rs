//! Frequency classifier.
//!
//! Slices a signal into fixed windows and reduces each window to its
//! dominant frequency, producing the token stream the decoder consumes.

use std::path::Path;

use muso_core::FrequencyToken;
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::error::AudioResult;
use crate::fft::DominantFrequency;
use crate::wav::{read_wav, Signal};

/// Classify every window of `signal`, in chronological order.
///
/// The last window may be shorter than the others; its span still reports
/// the nominal window end.
pub fn classify(signal: &Signal, config: &AnalysisConfig) -> AudioResult<Vec<FrequencyToken>> {
    let chunk_samples = config.chunk_samples(signal.sample_rate)?;
    let rate = f64::from(signal.sample_rate);
    let mut analyzer = DominantFrequency::new(config.window_fn);
    let mut tokens = Vec::with_capacity(signal.samples.len() / chunk_samples + 1);

    for (index, chunk) in signal.samples.chunks(chunk_samples).enumerate() {
        let start_sample = index * chunk_samples;
        let end_sample = start_sample + chunk_samples;

        let hz = analyzer.measure(chunk, signal.sample_rate);
        let mut token = FrequencyToken::new(hz, start_sample as f64 / rate, end_sample as f64 / rate);
        if let Some(step) = config.quantize_hz {
            token = token.quantized(step);
        }

        debug!(%token, "classified window");
        tokens.push(token);
    }

    info!(
        windows = tokens.len(),
        duration_secs = signal.duration_secs(),
        "classification finished"
    );
    Ok(tokens)
}

/// Load a WAV file and classify it
pub fn classify_file(path: &Path, config: &AnalysisConfig) -> AudioResult<Vec<FrequencyToken>> {
    let signal = read_wav(path)?;
    classify(&signal, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tone_track(freqs: &[f64], sample_rate: u32) -> Signal {
        let per_tone = sample_rate as usize;
        let samples = freqs
            .iter()
            .flat_map(|&f| {
                (0..per_tone).map(move |i| {
                    (2.0 * PI * f * i as f64 / f64::from(sample_rate)).sin() as f32 * 0.5
                })
            })
            .collect();
        Signal { samples, sample_rate }
    }

    #[test]
    fn one_token_per_window() {
        let signal = tone_track(&[700.0, 10.0, 110.0], 4000);
        let tokens = classify(&signal, &AnalysisConfig::default()).expect("classify failed");
        let values: Vec<f64> = tokens.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![700.0, 10.0, 110.0]);
        assert_eq!(tokens[1].start, 1.0);
        assert_eq!(tokens[1].end, 2.0);
    }

    #[test]
    fn short_tail_keeps_nominal_end() {
        let mut signal = tone_track(&[50.0], 4000);
        signal.samples.extend(std::iter::repeat(0.0).take(1000));
        let tokens = classify(&signal, &AnalysisConfig::default()).expect("classify failed");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].value, 0.0);
        assert_eq!(tokens[1].start, 1.0);
        assert_eq!(tokens[1].end, 2.0);
    }

    #[test]
    fn quantization_applies_to_tokens() {
        // Half-second windows give 2 Hz bins; 51 Hz lands between them
        let signal = tone_track(&[51.0], 4000);
        let config = AnalysisConfig {
            window_secs: 0.5,
            quantize_hz: Some(10.0),
            ..AnalysisConfig::default()
        };
        let tokens = classify(&signal, &config).expect("classify failed");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.value == 50.0));
    }

    #[test]
    fn empty_signal_has_no_tokens() {
        let signal = Signal {
            samples: Vec::new(),
            sample_rate: 4000,
        };
        assert!(classify(&signal, &AnalysisConfig::default())
            .expect("classify failed")
            .is_empty());
    }
}
