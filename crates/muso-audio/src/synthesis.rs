//! Tone synthesis for authoring programs.
//!
//! Renders a list of timed sine tones into a normalized track whose windowed
//! classification reproduces the tone frequencies.

use std::f64::consts::PI;

use tracing::debug;

use crate::config::SynthConfig;
use crate::error::{AudioError, AudioResult};

/// Longest track `render` will allocate (seconds)
pub const MAX_TRACK_SECS: f64 = 3600.0;

/// A sine tone placed on the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_secs: f64,
    pub freq_hz: f64,
    pub duration_secs: f64,
}

impl Tone {
    pub fn end_secs(&self) -> f64 {
        self.start_secs + self.duration_secs
    }
}

/// Parse `<start_time(s)>,<frequency(Hz)>,<duration(s)>` rows.
///
/// Row numbers in errors are 0-based and count the skipped header.
pub fn parse_tone_csv(text: &str, skip_header: bool) -> AudioResult<Vec<Tone>> {
    let mut tones = Vec::new();

    for (row, line) in text.lines().enumerate() {
        if row == 0 && skip_header {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(AudioError::Csv {
                row,
                message: "Invalid number of arguments".to_string(),
            });
        }

        let parsed: Result<Vec<f64>, _> = fields.iter().map(|f| f.parse::<f64>()).collect();
        let values = parsed
            .ok()
            .filter(|values| values.iter().all(|v| v.is_finite()))
            .ok_or_else(|| AudioError::Csv {
                row,
                message: "All row elements must be real numbers.".to_string(),
            })?;
        if values[0] < 0.0 || values[2] < 0.0 {
            return Err(AudioError::Csv {
                row,
                message: "Start time and duration must not be negative.".to_string(),
            });
        }

        tones.push(Tone {
            start_secs: values[0],
            freq_hz: values[1],
            duration_secs: values[2],
        });
    }

    Ok(tones)
}

/// Back-to-back tones, one per frequency, each lasting `token_secs`
pub fn tones_from_sequence(freqs: &[f64], token_secs: f64) -> Vec<Tone> {
    freqs
        .iter()
        .enumerate()
        .map(|(i, &freq_hz)| Tone {
            start_secs: i as f64 * token_secs,
            freq_hz,
            duration_secs: token_secs,
        })
        .collect()
}

/// Mix `tones` into a silent track and normalize it to a peak of 1.0
pub fn render(tones: &[Tone], config: &SynthConfig) -> AudioResult<Vec<f32>> {
    config.validate()?;

    let duration = match config.duration_secs {
        Some(d) => d,
        None if tones.is_empty() => return Err(AudioError::EmptySequence),
        None => tones.iter().map(Tone::end_secs).fold(0.0, f64::max),
    };

    if !(duration.is_finite() && duration <= MAX_TRACK_SECS) {
        return Err(AudioError::Config(format!(
            "track of {}s exceeds the {}s limit",
            duration, MAX_TRACK_SECS
        )));
    }

    let rate = f64::from(config.sample_rate);
    let mut track = vec![0.0f64; (rate * duration) as usize];

    for tone in tones {
        // Float to usize casts saturate; a start past the track is skipped below.
        let start = (tone.start_secs * rate) as usize;
        let len = (rate * tone.duration_secs) as usize;
        let end = start.saturating_add(len).min(track.len());
        if start >= end {
            continue;
        }

        for (i, sample) in track[start..end].iter_mut().enumerate() {
            let t = i as f64 / rate;
            *sample += config.amplitude * (2.0 * PI * tone.freq_hz * t).sin();
        }
    }

    let peak = track.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
    debug!(tones = tones.len(), frames = track.len(), peak, "rendered track");

    let scale = if peak > 0.0 { 1.0 / peak } else { 0.0 };
    Ok(track.into_iter().map(|s| (s * scale) as f32).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_with_header() {
        let text = "start,freq,duration\n0,700,1\n1, 10 ,1\n\n2,110,0.5\n";
        let tones = parse_tone_csv(text, true).expect("parse failed");
        assert_eq!(tones.len(), 3);
        assert_eq!(tones[1].freq_hz, 10.0);
        assert_eq!(tones[2].end_secs(), 2.5);
    }

    #[test]
    fn csv_errors_name_the_row() {
        let err = parse_tone_csv("0,700\n", false).expect_err("expected error");
        assert_eq!(
            err.to_string(),
            "Wrong row formatting in row 0: Invalid number of arguments"
        );

        let err = parse_tone_csv("0,700,1\n1,abc,1\n", false).expect_err("expected error");
        assert!(matches!(err, AudioError::Csv { row: 1, .. }));
    }

    #[test]
    fn csv_rejects_non_finite_and_negative_values() {
        let err = parse_tone_csv("0,inf,1\n", false).expect_err("expected error");
        assert!(matches!(err, AudioError::Csv { row: 0, .. }));

        let err = parse_tone_csv("0,440,1\n-1,440,1\n", false).expect_err("expected error");
        assert!(matches!(err, AudioError::Csv { row: 1, .. }));
    }

    #[test]
    fn far_away_tone_is_skipped_not_overflowed() {
        let tones = parse_tone_csv("1e300,440,1\n0,100,1\n", false).expect("parse failed");
        let config = SynthConfig {
            sample_rate: 1000,
            duration_secs: Some(1.0),
            ..SynthConfig::default()
        };
        let track = render(&tones, &config).expect("render failed");
        assert_eq!(track.len(), 1000);
        assert!(track.iter().any(|&s| s != 0.0));
    }

    #[test]
    fn oversized_track_is_a_config_error() {
        let tones = parse_tone_csv("1e300,440,1\n", false).expect("parse failed");
        let config = SynthConfig {
            sample_rate: 1000,
            ..SynthConfig::default()
        };
        assert!(matches!(render(&tones, &config), Err(AudioError::Config(_))));

        let config = SynthConfig {
            sample_rate: 1000,
            duration_secs: Some(MAX_TRACK_SECS * 2.0),
            ..SynthConfig::default()
        };
        assert!(matches!(render(&[], &config), Err(AudioError::Config(_))));
    }

    #[test]
    fn sequence_is_back_to_back() {
        let tones = tones_from_sequence(&[700.0, 10.0], 0.5);
        assert_eq!(tones[1].start_secs, 0.5);
        assert_eq!(tones[1].duration_secs, 0.5);
    }

    #[test]
    fn render_normalizes_and_sizes_track() {
        let tones = tones_from_sequence(&[100.0, 200.0], 1.0);
        let config = SynthConfig {
            sample_rate: 1000,
            ..SynthConfig::default()
        };
        let track = render(&tones, &config).expect("render failed");
        assert_eq!(track.len(), 2000);
        let peak = track.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        assert!((peak - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tones_past_the_end_are_clipped() {
        let tones = [Tone {
            start_secs: 0.5,
            freq_hz: 50.0,
            duration_secs: 2.0,
        }];
        let config = SynthConfig {
            sample_rate: 1000,
            duration_secs: Some(1.0),
            ..SynthConfig::default()
        };
        let track = render(&tones, &config).expect("render failed");
        assert_eq!(track.len(), 1000);
        assert!(track[..500].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn silence_and_empty_input() {
        let config = SynthConfig {
            sample_rate: 1000,
            duration_secs: Some(0.5),
            ..SynthConfig::default()
        };
        let track = render(&[], &config).expect("render failed");
        assert!(track.iter().all(|&s| s == 0.0));

        assert!(matches!(
            render(&[], &SynthConfig::default()),
            Err(AudioError::EmptySequence)
        ));
    }
}
