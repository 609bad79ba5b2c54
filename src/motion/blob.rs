// blob.rs - Per-blob configuration and the offset function
//
// The sign columns come straight from the reference scene as a fixed
// table, including the odd z flip on blob 3. Hard-coded on purpose;
// do not derive them from a rule.

use glam::Vec3;

/// Fixed motion parameters for one blob.
#[derive(Clone, Copy, Debug)]
pub struct BlobConfig {
    pub id: u8,
    /// Divides elapsed time before the sine; larger = slower.
    pub frequency_divisor: f32,
    /// Lateral drift direction.
    pub x_sign: f32,
    /// Depth drift direction.
    pub z_sign: f32,
}

pub const BLOBS: [BlobConfig; 3] = [
    BlobConfig { id: 1, frequency_divisor: 1.0, x_sign: 1.0, z_sign: -1.0 },
    BlobConfig { id: 2, frequency_divisor: 2.0, x_sign: -1.0, z_sign: 1.0 },
    BlobConfig { id: 3, frequency_divisor: 1.6, x_sign: -1.0, z_sign: -1.0 },
];

/// One metaball source: fixed config plus the position the field reads.
pub struct Blob {
    pub config: BlobConfig,
    pub position: Vec3,
}

impl Blob {
    pub fn new(config: BlobConfig) -> Self {
        Self {
            position: offset_at(&config, 0.0),
            config,
        }
    }
}

/// Offset of a blob at the given elapsed time.
///
/// Vertical bob has amplitude 0.5 centered at -0.1. Lateral and depth
/// drift share its phase: magnitude peaks at 1/15 in the trough and
/// vanishes at the peak, so blobs wobble hardest when they sit low.
/// Total over all inputs, no state.
pub fn offset_at(config: &BlobConfig, elapsed_seconds: f32) -> Vec3 {
    let s = (elapsed_seconds / config.frequency_divisor).sin();
    let drift = (1.0 - s) / 30.0;
    Vec3::new(config.x_sign * drift, s / 2.0 - 0.1, config.z_sign * drift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f32 = 1e-4;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(
            (a - b).abs().max_element() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn repeats_every_period() {
        for config in &BLOBS {
            let period = TAU * config.frequency_divisor;
            for t in [0.0, 0.37, 1.9, 4.2] {
                assert_close(offset_at(config, t), offset_at(config, t + period));
            }
        }
    }

    #[test]
    fn stays_in_bounds() {
        for config in &BLOBS {
            // Two full periods of the slowest blob, fine steps.
            for i in 0..2600 {
                let p = offset_at(config, i as f32 * 0.01);
                assert!(p.y >= -0.6 - EPS && p.y <= 0.4 + EPS, "y = {}", p.y);
                assert!(p.x.abs() <= 1.0 / 15.0 + EPS, "x = {}", p.x);
                assert!(p.z.abs() <= 1.0 / 15.0 + EPS, "z = {}", p.z);
            }
        }
    }

    #[test]
    fn drift_peaks_in_the_trough() {
        for config in &BLOBS {
            // sin = -1: lowest point, maximal drift.
            let trough = offset_at(config, 1.5 * PI * config.frequency_divisor);
            assert!((trough.y - -0.6).abs() < EPS);
            assert!((trough.x.abs() - 1.0 / 15.0).abs() < EPS);
            assert!((trough.z.abs() - 1.0 / 15.0).abs() < EPS);

            // sin = 1: highest point, no drift.
            let peak = offset_at(config, FRAC_PI_2 * config.frequency_divisor);
            assert!((peak.y - 0.4).abs() < EPS);
            assert!(peak.x.abs() < EPS);
            assert!(peak.z.abs() < EPS);
        }
    }

    #[test]
    fn deterministic() {
        for config in &BLOBS {
            assert_eq!(offset_at(config, 123.456), offset_at(config, 123.456));
        }
    }

    #[test]
    fn blob_one_reference_points() {
        let config = &BLOBS[0];

        assert_close(offset_at(config, 0.0), Vec3::new(0.0, -0.1, 0.0));
        assert_close(offset_at(config, FRAC_PI_2), Vec3::new(0.0, 0.4, 0.0));
        assert_close(
            offset_at(config, PI),
            Vec3::new(1.0 / 30.0, -0.1, -1.0 / 30.0),
        );
    }

    #[test]
    fn sign_table_is_verbatim() {
        // Blob 3 flips z relative to its x, unlike blobs 1 and 2.
        assert_eq!(BLOBS[0].x_sign * BLOBS[0].z_sign, -1.0);
        assert_eq!(BLOBS[1].x_sign * BLOBS[1].z_sign, -1.0);
        assert_eq!(BLOBS[2].x_sign * BLOBS[2].z_sign, 1.0);
    }
}
