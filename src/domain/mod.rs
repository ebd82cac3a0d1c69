/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collection endpoint payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodiesEnvelope {
    #[serde(default)]
    pub bodies: Vec<RawBodyRecord>,
}

/// A solar-system body as delivered by the upstream API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBodyRecord {
    pub id: Option<String>,
    pub english_name: Option<String>,
    pub name: Option<String>,
    pub is_planet: Option<bool>,
    pub body_type: Option<String>,
    pub moons: Option<Vec<MoonRef>>,
    pub gravity: Option<f64>,
    pub density: Option<f64>,
    pub escape: Option<f64>,
    pub discovery_date: Option<String>,
    pub discovered_by: Option<String>,
    pub mass: Option<Mass>,
    pub mean_radius: Option<f64>,
    pub equa_radius: Option<f64>,
    pub polar_radius: Option<f64>,
    pub flattening: Option<f64>,
    pub inclination: Option<f64>,
    pub eccentricity: Option<f64>,
    pub semimajor_axis: Option<f64>,
    pub sideral_orbit: Option<f64>,
    pub sideral_rotation: Option<f64>,
    pub perihelion: Option<f64>,
    pub aphelion: Option<f64>,
    pub axial_tilt: Option<f64>,
    pub avg_temp: Option<f64>,
    pub main_anomaly: Option<f64>,
    pub arg_periapsis: Option<f64>,
    pub long_asc_node: Option<f64>,
}

impl RawBodyRecord {
    pub fn is_planet(&self) -> bool {
        self.is_planet.unwrap_or(false)
    }

    pub fn is_dwarf_planet(&self) -> bool {
        self.body_type.as_deref() == Some("Dwarf Planet")
    }

    pub fn moon_count(&self) -> usize {
        self.moons.as_ref().map_or(0, Vec::len)
    }

    /// Records without any identity are what the upstream sends for unknown names.
    pub fn is_blank(&self) -> bool {
        self.id.is_none() && self.english_name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mass {
    pub mass_value: f64,
    pub mass_exponent: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonRef {
    pub moon: String,
    #[serde(default)]
    pub rel: Option<String>,
}

/// Listing category of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    #[serde(rename = "planet")]
    Planet,
    #[serde(rename = "dwarf planet")]
    DwarfPlanet,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Planet => "planet",
            BodyType::DwarfPlanet => "dwarf planet",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the dashboard listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRow {
    pub id: usize,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub body_type: BodyType,
    #[serde(rename = "distanceFromSunAU")]
    pub distance_from_sun_au: f64,
    pub diameter_km: f64,
    pub moon_count: usize,
    pub discovery_year: String,
    pub gravity: f64,
    pub density: f64,
    pub escape_velocity: f64,
    pub orbital_period_days: f64,
    pub rotation_period_hours: f64,
}

/// Dashboard headline numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub average_diameter_km: f64,
    pub total_moons: usize,
}

/// Type selector of the dashboard filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(BodyType),
}

impl TypeFilter {
    pub fn matches(&self, body_type: BodyType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == body_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(TypeFilter::All),
            "planet" => Ok(TypeFilter::Only(BodyType::Planet)),
            "dwarf planet" => Ok(TypeFilter::Only(BodyType::DwarfPlanet)),
            other => Err(format!(
                "unknown type filter '{other}', expected all, planet or dwarf planet"
            )),
        }
    }
}

/// A labelled value for charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint<V> {
    pub name: String,
    pub value: V,
}

/// Series backing the dashboard charts
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCharts {
    pub diameters: Vec<ChartPoint<f64>>,
    pub types: Vec<ChartPoint<usize>>,
    pub moons: Vec<ChartPoint<usize>>,
}

/// A loaded catalog snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub rows: Vec<CatalogRow>,
    pub fetched_at: DateTime<Utc>,
}

/// One point of the detail-page orbit charts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalSample {
    pub time_offset_days: f64,
    pub distance_million_km: f64,
    pub temperature_kelvin: f64,
}

/// Normalized single-body record for the detail view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDetail {
    pub id: Option<String>,
    pub name: Option<String>,
    pub latin_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub body_type: Option<String>,
    pub moon_count: usize,
    pub moons: Vec<String>,
    pub discovery_date: String,
    pub discovered_by: String,
    pub mass: Option<Mass>,
    pub gravity: Option<f64>,
    pub density: Option<f64>,
    pub mean_radius: Option<f64>,
    pub equa_radius: Option<f64>,
    pub polar_radius: Option<f64>,
    pub flattening: Option<f64>,
    pub inclination: Option<f64>,
    pub eccentricity: Option<f64>,
    pub semimajor_axis: Option<f64>,
    pub sideral_orbit: Option<f64>,
    pub sideral_rotation: Option<f64>,
    pub perihelion: Option<f64>,
    pub aphelion: Option<f64>,
    pub axial_tilt: Option<f64>,
    pub avg_temp: Option<f64>,
    pub main_anomaly: Option<f64>,
    pub arg_periapsis: Option<f64>,
    pub long_asc_node: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailFact {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailSection {
    pub title: &'static str,
    pub facts: Vec<DetailFact>,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_reads_camel_case() {
        let json = serde_json::json!({
            "id": "terre",
            "englishName": "Earth",
            "isPlanet": true,
            "moons": [{"moon": "La Lune", "rel": "https://example/lune"}],
            "semimajorAxis": 149598023,
            "mass": {"massValue": 5.97237, "massExponent": 24},
            "avgTemp": 288
        });
        let record: RawBodyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.english_name.as_deref(), Some("Earth"));
        assert!(record.is_planet());
        assert_eq!(record.moon_count(), 1);
        assert_eq!(record.semimajor_axis, Some(149598023.0));
        assert_eq!(record.mass.unwrap().mass_exponent, 24);
        assert_eq!(record.gravity, None);
    }

    #[test]
    fn test_null_moons_is_absent() {
        let record: RawBodyRecord =
            serde_json::from_value(serde_json::json!({"id": "ceres", "moons": null})).unwrap();
        assert_eq!(record.moon_count(), 0);
        assert!(!record.is_blank());
    }

    #[test]
    fn test_type_filter_parse() {
        assert_eq!("all".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert_eq!("".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert_eq!(
            "Dwarf Planet".parse::<TypeFilter>(),
            Ok(TypeFilter::Only(BodyType::DwarfPlanet))
        );
        assert!("comet".parse::<TypeFilter>().is_err());
    }

    #[test]
    fn test_body_type_serializes_lowercase() {
        let json = serde_json::to_value(BodyType::DwarfPlanet).unwrap();
        assert_eq!(json, serde_json::json!("dwarf planet"));
    }
}
