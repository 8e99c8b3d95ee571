//! WAV file input and output.

use std::path::Path;

use tracing::debug;

use crate::error::{AudioError, AudioResult};

/// Mono signal normalized to [-1, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl Signal {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }
}

/// Load a WAV file at its native sample rate, down-mixed to mono
pub fn read_wav(path: &Path) -> AudioResult<Signal> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => {
            if spec.bits_per_sample != 32 {
                return Err(AudioError::UnsupportedFormat(format!("{:?}", spec)));
            }
            reader.samples::<f32>().collect::<Result<_, _>>()?
        }
        hound::SampleFormat::Int => match spec.bits_per_sample {
            8 => reader
                .samples::<i8>()
                .map(|s| s.map(|raw| f32::from(raw) / 128.0))
                .collect::<Result<_, _>>()?,
            16 => reader
                .samples::<i16>()
                .map(|s| s.map(|raw| f32::from(raw) / 32768.0))
                .collect::<Result<_, _>>()?,
            24 => reader
                .samples::<i32>()
                .map(|s| s.map(|raw| raw as f32 / 8388608.0))
                .collect::<Result<_, _>>()?,
            32 => reader
                .samples::<i32>()
                .map(|s| s.map(|raw| raw as f32 / 2147483648.0))
                .collect::<Result<_, _>>()?,
            _ => return Err(AudioError::UnsupportedFormat(format!("{:?}", spec))),
        },
    };

    let channels = usize::from(spec.channels.max(1));
    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    };

    debug!(
        path = %path.display(),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        frames = samples.len(),
        "loaded wav"
    );

    Ok(Signal {
        samples,
        sample_rate: spec.sample_rate,
    })
}

/// Write normalized samples as mono 16-bit PCM
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> AudioResult<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample((sample.clamp(-1.0, 1.0) * 32767.0) as i16)?;
    }
    writer.finalize()?;
    debug!(path = %path.display(), frames = samples.len(), "wrote wav");
    Ok(())
}
