//! Base-envelope modulation of sub-wave samples.

use crate::error::{CurveError, CurveResult};
use crate::sampler::Sample;

/// Multiplies a sub-wave's samples by the base wave's envelope.
///
/// Each output value is `wave.y * base.y * factor` with
/// `factor = wave_amplitude / max_sub_amplitude`, so the tallest sub-wave
/// rides the base envelope at full height and the rest taper with the same
/// silhouette. A zero `max_sub_amplitude` flattens every wave to zero instead
/// of dividing by it.
///
/// Both sequences must have the same length: they are sampled at one shared
/// point count, so a mismatch is a broken invariant
/// ([`CurveError::SampleCountMismatch`]), not an input condition.
pub fn modulate(
    base: &[Sample],
    wave: &[Sample],
    wave_amplitude: f64,
    max_sub_amplitude: f64,
) -> CurveResult<Vec<Sample>> {
    if base.len() != wave.len() {
        return Err(CurveError::SampleCountMismatch {
            base: base.len(),
            wave: wave.len(),
        });
    }

    let factor = if max_sub_amplitude == 0.0 {
        0.0
    } else {
        wave_amplitude / max_sub_amplitude
    };

    Ok(wave
        .iter()
        .zip(base)
        .map(|(w, b)| Sample {
            x: w.x,
            y: w.y * b.y * factor,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::sample_sine;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_length_matches_input() {
        let base = sample_sine(0.5, 0.5, 0.0, 25);
        let wave = sample_sine(0.3, 2.5, 0.0, 25);
        let out = modulate(&base, &wave, 0.3, 0.3).unwrap();
        assert_eq!(out.len(), 25);
    }

    #[test]
    fn test_x_values_carried_over() {
        let base = sample_sine(0.5, 0.5, 0.0, 10);
        let wave = sample_sine(0.3, 2.0, 0.1, 10);
        let out = modulate(&base, &wave, 0.3, 0.3).unwrap();
        for (o, w) in out.iter().zip(&wave) {
            assert_eq!(o.x, w.x);
        }
    }

    #[test]
    fn test_tallest_wave_keeps_full_envelope() {
        let base = sample_sine(0.5, 0.5, 0.0, 20);
        let wave = sample_sine(0.4, 2.0, 0.0, 20);
        // factor is 1 when this wave's amplitude is the maximum
        let out = modulate(&base, &wave, 0.4, 0.4).unwrap();
        for ((o, w), b) in out.iter().zip(&wave).zip(&base) {
            assert!((o.y - w.y * b.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_shorter_wave_tapers_proportionally() {
        let base = sample_sine(0.5, 0.5, 0.0, 20);
        let wave = sample_sine(0.2, 2.0, 0.0, 20);
        let out = modulate(&base, &wave, 0.2, 0.4).unwrap();
        for ((o, w), b) in out.iter().zip(&wave).zip(&base) {
            assert!((o.y - w.y * b.y * 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_max_amplitude_flattens_output() {
        let base = sample_sine(0.5, 0.5, 0.0, 20);
        let wave = sample_sine(0.0, 2.0, 0.0, 20);
        let out = modulate(&base, &wave, 0.0, 0.0).unwrap();
        assert!(out.iter().all(|s| s.y == 0.0));
    }

    #[test]
    fn test_length_mismatch_is_a_defect() {
        let base = sample_sine(0.5, 0.5, 0.0, 25);
        let wave = sample_sine(0.3, 2.5, 0.0, 10);
        let err = modulate(&base, &wave, 0.3, 0.3).unwrap_err();
        assert_eq!(err, CurveError::SampleCountMismatch { base: 25, wave: 10 });
    }

    #[test]
    fn test_empty_sequences_modulate_to_empty() {
        let out = modulate(&[], &[], 0.3, 0.3).unwrap();
        assert!(out.is_empty());
    }
}
