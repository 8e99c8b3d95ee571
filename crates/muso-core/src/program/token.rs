//! Frequency Tokens
//!
//! One classified window of the input signal. A token's identity (its value
//! alone) is what names a variable; the time span is only kept for diagnostics.

use std::fmt;

use super::opcode::Opcode;

/// Hashable identity of a frequency value.
///
/// Equal frequencies share one identity. `-0.0` is folded into `0.0` and
/// every NaN maps to the same identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity(u64);

impl Identity {
    pub fn new(value: f64) -> Self {
        let canonical = if value == 0.0 {
            0.0
        } else if value.is_nan() {
            f64::NAN
        } else {
            value
        };
        Identity(canonical.to_bits())
    }

    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl From<f64> for Identity {
    fn from(value: f64) -> Self {
        Identity::new(value)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A measured frequency and the time span `[start, end)` it covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyToken {
    pub value: f64,
    pub start: f64,
    pub end: f64,
}

impl FrequencyToken {
    pub fn new(value: f64, start: f64, end: f64) -> Self {
        FrequencyToken { value, start, end }
    }

    /// Token without a meaningful time span
    pub fn bare(value: f64) -> Self {
        FrequencyToken::new(value, 0.0, 0.0)
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.value)
    }

    /// The opcode this token opens, if its value is reserved
    pub fn opcode(&self) -> Option<Opcode> {
        Opcode::from_hz(self.value)
    }

    /// Snap the value to the nearest multiple of `step`, keeping the span
    pub fn quantized(self, step: f64) -> Self {
        FrequencyToken {
            value: (self.value / step).round() * step,
            ..self
        }
    }
}

impl fmt::Display for FrequencyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}-{:.2}s)", self.value, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_ignores_time_span() {
        let a = FrequencyToken::new(10.0, 0.0, 1.0);
        let b = FrequencyToken::new(10.0, 7.0, 8.0);
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), FrequencyToken::bare(10.5).identity());
    }

    #[test]
    fn signed_zero_and_nan_collapse() {
        let mut set = HashSet::new();
        set.insert(Identity::new(0.0));
        set.insert(Identity::new(-0.0));
        set.insert(Identity::new(f64::NAN));
        set.insert(Identity::new(-f64::NAN));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn quantize_snaps_to_grid() {
        let token = FrequencyToken::new(109.6, 2.0, 3.0).quantized(10.0);
        assert_eq!(token.value, 110.0);
        assert_eq!(token.start, 2.0);
        assert_eq!(token.opcode(), Some(Opcode::Print));
    }

    #[test]
    fn display_shows_span() {
        let token = FrequencyToken::new(42.0, 1.0, 2.0);
        assert_eq!(token.to_string(), "42 (1.00-2.00s)");
    }
}
