/// Single-body normalization and display facts for the detail view
use crate::domain::{DetailFact, DetailSection, Mass, ObjectDetail, RawBodyRecord};
use crate::utils::{group_thousands, known, million_km, non_blank};

pub fn describe(body: &RawBodyRecord) -> ObjectDetail {
    let kind = if body.is_planet() {
        Some("Planet".to_string())
    } else {
        body.body_type.clone()
    };

    ObjectDetail {
        id: body.id.clone(),
        name: body.english_name.clone(),
        latin_name: body.name.clone(),
        kind,
        body_type: body.body_type.clone(),
        moon_count: body.moon_count(),
        moons: body
            .moons
            .iter()
            .flatten()
            .map(|m| m.moon.clone())
            .collect(),
        discovery_date: non_blank(body.discovery_date.as_deref())
            .unwrap_or("Prehistoric")
            .to_string(),
        discovered_by: non_blank(body.discovered_by.as_deref())
            .unwrap_or("Unknown")
            .to_string(),
        mass: body.mass.clone(),
        gravity: body.gravity,
        density: body.density,
        mean_radius: body.mean_radius,
        equa_radius: body.equa_radius,
        polar_radius: body.polar_radius,
        flattening: body.flattening,
        inclination: body.inclination,
        eccentricity: body.eccentricity,
        semimajor_axis: body.semimajor_axis,
        sideral_orbit: body.sideral_orbit,
        sideral_rotation: body.sideral_rotation,
        perihelion: body.perihelion,
        aphelion: body.aphelion,
        axial_tilt: body.axial_tilt,
        avg_temp: body.avg_temp,
        main_anomaly: body.main_anomaly,
        arg_periapsis: body.arg_periapsis,
        long_asc_node: body.long_asc_node,
    }
}

pub fn format_mass(mass: Option<&Mass>) -> String {
    match mass {
        Some(m) => format!("{} × 10^{} kg", m.mass_value, m.mass_exponent),
        None => UNKNOWN.to_string(),
    }
}

const UNKNOWN: &str = "Unknown";

fn fact(label: &'static str, value: Option<String>) -> DetailFact {
    DetailFact {
        label,
        value: value.unwrap_or_else(|| UNKNOWN.to_string()),
    }
}

fn with_unit(value: Option<f64>, unit: &str) -> Option<String> {
    known(value).map(|v| format!("{v}{unit}"))
}

fn grouped(value: Option<f64>, unit: &str) -> Option<String> {
    known(value).map(|v| format!("{}{unit}", group_thousands(v)))
}

/// Overview, physical and orbital facts, "Unknown" where the value is missing or zero
pub fn sections(detail: &ObjectDetail) -> Vec<DetailSection> {
    let overview = DetailSection {
        title: "Overview",
        facts: vec![
            fact("Latin Name", detail.latin_name.clone()),
            fact("Body Type", detail.body_type.clone()),
            fact(
                "Discovery",
                Some(format!(
                    "{} by {}",
                    detail.discovery_date, detail.discovered_by
                )),
            ),
            fact("Mass", Some(format_mass(detail.mass.as_ref()))),
            fact("Gravity", with_unit(detail.gravity, " m/s²")),
            fact("Density", with_unit(detail.density, " g/cm³")),
        ],
    };

    let physical = DetailSection {
        title: "Physical Characteristics",
        facts: vec![
            fact("Mean Radius", grouped(detail.mean_radius, " km")),
            fact("Equatorial Radius", grouped(detail.equa_radius, " km")),
            fact("Polar Radius", grouped(detail.polar_radius, " km")),
            fact("Flattening", with_unit(detail.flattening, "")),
            fact("Average Temperature", with_unit(detail.avg_temp, " K")),
            fact("Axial Tilt", with_unit(detail.axial_tilt, "°")),
        ],
    };

    let orbital = DetailSection {
        title: "Orbital Characteristics",
        facts: vec![
            fact("Semimajor Axis", known(detail.semimajor_axis).map(million_km)),
            fact("Orbital Period", grouped(detail.sideral_orbit, " days")),
            fact("Rotation Period", grouped(detail.sideral_rotation, " hours")),
            fact("Eccentricity", with_unit(detail.eccentricity, "")),
            fact("Inclination", with_unit(detail.inclination, "°")),
            fact("Perihelion", known(detail.perihelion).map(million_km)),
            fact("Aphelion", known(detail.aphelion).map(million_km)),
        ],
    };

    vec![overview, physical, orbital]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MoonRef;

    fn fact_value<'a>(sections: &'a [DetailSection], label: &str) -> &'a str {
        sections
            .iter()
            .flat_map(|s| s.facts.iter())
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
            .unwrap()
    }

    fn earth() -> RawBodyRecord {
        RawBodyRecord {
            id: Some("terre".into()),
            english_name: Some("Earth".into()),
            name: Some("La Terre".into()),
            is_planet: Some(true),
            body_type: Some("Planet".into()),
            moons: Some(vec![MoonRef {
                moon: "La Lune".into(),
                rel: None,
            }]),
            discovery_date: Some(String::new()),
            mass: Some(Mass {
                mass_value: 5.97237,
                mass_exponent: 24,
            }),
            gravity: Some(9.8),
            mean_radius: Some(6371.0084),
            semimajor_axis: Some(149_598_023.0),
            sideral_orbit: Some(365.256),
            axial_tilt: Some(23.4392811),
            avg_temp: Some(288.0),
            eccentricity: Some(0.0167),
            inclination: Some(0.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_describe_planet() {
        let detail = describe(&earth());
        assert_eq!(detail.kind.as_deref(), Some("Planet"));
        assert_eq!(detail.latin_name.as_deref(), Some("La Terre"));
        assert_eq!(detail.moon_count, 1);
        assert_eq!(detail.moons, vec!["La Lune".to_string()]);
        assert_eq!(detail.discovery_date, "Prehistoric");
        assert_eq!(detail.discovered_by, "Unknown");
    }

    #[test]
    fn test_describe_non_planet_keeps_body_type() {
        let ceres = RawBodyRecord {
            english_name: Some("Ceres".into()),
            is_planet: Some(false),
            body_type: Some("Dwarf Planet".into()),
            discovery_date: Some("01/01/1801".into()),
            discovered_by: Some("Giuseppe Piazzi".into()),
            ..Default::default()
        };
        let detail = describe(&ceres);
        assert_eq!(detail.kind.as_deref(), Some("Dwarf Planet"));
        assert_eq!(detail.moon_count, 0);
        assert!(detail.moons.is_empty());
        assert_eq!(detail.discovered_by, "Giuseppe Piazzi");
    }

    #[test]
    fn test_sections_format_values() {
        let sections = sections(&describe(&earth()));
        assert_eq!(sections.len(), 3);
        assert_eq!(fact_value(&sections, "Mass"), "5.97237 × 10^24 kg");
        assert_eq!(fact_value(&sections, "Gravity"), "9.8 m/s²");
        assert_eq!(fact_value(&sections, "Mean Radius"), "6,371.008 km");
        assert_eq!(fact_value(&sections, "Semimajor Axis"), "149.60 million km");
        assert_eq!(fact_value(&sections, "Orbital Period"), "365.256 days");
        assert_eq!(fact_value(&sections, "Average Temperature"), "288 K");
        assert_eq!(fact_value(&sections, "Discovery"), "Prehistoric by Unknown");
    }

    #[test]
    fn test_sections_unknown_for_missing_or_zero() {
        let sections = sections(&describe(&earth()));
        assert_eq!(fact_value(&sections, "Density"), "Unknown");
        assert_eq!(fact_value(&sections, "Inclination"), "Unknown");
        assert_eq!(fact_value(&sections, "Perihelion"), "Unknown");
    }

    #[test]
    fn test_format_mass_missing() {
        assert_eq!(format_mass(None), "Unknown");
    }
}
