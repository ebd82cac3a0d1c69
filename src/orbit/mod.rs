/// Synthetic orbit samples for the detail-page distance and temperature charts
use crate::config::OrbitSettings;
use crate::domain::{OrbitalSample, RawBodyRecord};
use crate::utils::round_to;
use rand::Rng;
use std::f64::consts::PI;

/// Earth's values, used when a body lacks its own
pub const FALLBACK_PERIOD_DAYS: f64 = 365.0;
pub const FALLBACK_ECCENTRICITY: f64 = 0.01667;
pub const FALLBACK_SEMIMAJOR_AXIS_KM: f64 = 149_598_000.0;

/// Orbital inputs of a single body; every field may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitalParams {
    pub eccentricity: Option<f64>,
    pub semimajor_axis_km: Option<f64>,
    pub orbital_period_days: Option<f64>,
    pub avg_temp_k: Option<f64>,
}

impl From<&RawBodyRecord> for OrbitalParams {
    fn from(body: &RawBodyRecord) -> Self {
        Self {
            eccentricity: body.eccentricity,
            semimajor_axis_km: body.semimajor_axis,
            orbital_period_days: body.sideral_orbit,
            avg_temp_k: body.avg_temp,
        }
    }
}

/// Sample one orbital period at `settings.sample_count` evenly spaced points.
///
/// Distance uses `a * (1 - e * cos(angle))`, a radial approximation rather
/// than the conic equation; chart consumers rely on that curve. Temperature is
/// the body's average minus a uniform draw from `[0, jitter_kelvin)` per
/// sample, or 0 when the average is unknown.
pub fn generate<R: Rng + ?Sized>(
    body: &OrbitalParams,
    settings: &OrbitSettings,
    rng: &mut R,
) -> Vec<OrbitalSample> {
    let n = settings.sample_count;
    let period = body
        .orbital_period_days
        .filter(|p| *p != 0.0)
        .unwrap_or(FALLBACK_PERIOD_DAYS);
    let ecc = body.eccentricity.unwrap_or(FALLBACK_ECCENTRICITY);
    let a = body.semimajor_axis_km.unwrap_or(FALLBACK_SEMIMAJOR_AXIS_KM);

    (0..n)
        .map(|i| {
            let fraction = i as f64 / n as f64;
            let angle = fraction * 2.0 * PI;
            let distance_factor = 1.0 - ecc * angle.cos();

            let temperature_kelvin = match body.avg_temp_k {
                Some(avg) => round_to(avg - jitter(settings.jitter_kelvin, rng), 1),
                None => 0.0,
            };

            OrbitalSample {
                time_offset_days: i as f64 * (period / n as f64),
                distance_million_km: round_to(a * distance_factor / 1_000_000.0, 2),
                temperature_kelvin,
            }
        })
        .collect()
}

fn jitter<R: Rng + ?Sized>(amplitude: f64, rng: &mut R) -> f64 {
    if amplitude > 0.0 {
        rng.gen_range(0.0..amplitude)
    } else {
        0.0
    }
}
