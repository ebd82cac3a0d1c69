/// Catalog projection: raw upstream bodies into dashboard listing rows
use crate::domain::{
    BodyType, CatalogRow, CatalogStats, ChartPoint, DashboardCharts, RawBodyRecord, TypeFilter,
};
use crate::utils::{non_blank, round_to};

/// Kilometres per AU in the upstream's convention
pub const KM_PER_AU: f64 = 149_598_000.0;

pub const DEFAULT_LIMIT: usize = 15;

/// Project upstream records into listing rows.
///
/// Only planets and dwarf planets survive; the first `limit` of them are kept
/// in source order. Ids are 1-based positions in that filtered list, so they
/// are not stable across fetches. Missing numbers become 0.
pub fn project(records: &[RawBodyRecord], limit: usize) -> Vec<CatalogRow> {
    records
        .iter()
        .filter(|body| body.is_planet() || body.is_dwarf_planet())
        .take(limit)
        .enumerate()
        .map(|(index, body)| project_one(index + 1, body))
        .collect()
}

fn project_one(id: usize, body: &RawBodyRecord) -> CatalogRow {
    let body_type = if body.is_planet() {
        BodyType::Planet
    } else {
        BodyType::DwarfPlanet
    };

    CatalogRow {
        id,
        name: body.english_name.clone(),
        body_type,
        distance_from_sun_au: body
            .semimajor_axis
            .map_or(0.0, |a| round_to(a / KM_PER_AU, 2)),
        diameter_km: body.mean_radius.map_or(0.0, |r| r * 2.0),
        moon_count: body.moon_count(),
        discovery_year: non_blank(body.discovery_date.as_deref())
            .unwrap_or("Prehistoric")
            .to_string(),
        gravity: body.gravity.unwrap_or(0.0),
        density: body.density.unwrap_or(0.0),
        escape_velocity: body.escape.unwrap_or(0.0),
        orbital_period_days: body.sideral_orbit.unwrap_or(0.0),
        rotation_period_hours: body.sideral_rotation.unwrap_or(0.0),
    }
}

/// Headline numbers over the whole listing
pub fn stats(rows: &[CatalogRow]) -> CatalogStats {
    let total = rows.len();
    let average_diameter_km = if total == 0 {
        0.0
    } else {
        let sum: f64 = rows
            .iter()
            .map(|row| {
                if row.diameter_km.is_finite() {
                    row.diameter_km
                } else {
                    0.0
                }
            })
            .sum();
        round_to(sum / total as f64, 2)
    };

    CatalogStats {
        total,
        average_diameter_km,
        total_moons: rows.iter().map(|row| row.moon_count).sum(),
    }
}

/// Search and type filtering over already-projected rows
pub fn filter(rows: &[CatalogRow], search: &str, type_filter: TypeFilter) -> Vec<CatalogRow> {
    let needle = search.to_lowercase();
    rows.iter()
        .filter(|row| {
            let name = row.name.as_deref().unwrap_or_default().to_lowercase();
            name.contains(&needle) && type_filter.matches(row.body_type)
        })
        .cloned()
        .collect()
}

/// Diameters of bodies with a known size, largest first
pub fn diameter_chart(rows: &[CatalogRow]) -> Vec<ChartPoint<f64>> {
    let mut points: Vec<ChartPoint<f64>> = rows
        .iter()
        .filter(|row| row.diameter_km > 0.0)
        .map(|row| ChartPoint {
            name: display_name(row),
            value: row.diameter_km,
        })
        .collect();
    points.sort_by(|a, b| b.value.total_cmp(&a.value));
    points
}

/// Planet / dwarf planet split
pub fn type_distribution(rows: &[CatalogRow]) -> Vec<ChartPoint<usize>> {
    let count = |wanted: BodyType| rows.iter().filter(|row| row.body_type == wanted).count();
    vec![
        ChartPoint {
            name: "Planets".to_string(),
            value: count(BodyType::Planet),
        },
        ChartPoint {
            name: "Dwarf Planets".to_string(),
            value: count(BodyType::DwarfPlanet),
        },
    ]
}

/// Moon counts of bodies that have any, most first
pub fn moon_chart(rows: &[CatalogRow]) -> Vec<ChartPoint<usize>> {
    let mut points: Vec<ChartPoint<usize>> = rows
        .iter()
        .filter(|row| row.moon_count > 0)
        .map(|row| ChartPoint {
            name: display_name(row),
            value: row.moon_count,
        })
        .collect();
    points.sort_by(|a, b| b.value.cmp(&a.value));
    points
}

pub fn charts(rows: &[CatalogRow]) -> DashboardCharts {
    DashboardCharts {
        diameters: diameter_chart(rows),
        types: type_distribution(rows),
        moons: moon_chart(rows),
    }
}

fn display_name(row: &CatalogRow) -> String {
    row.name.clone().unwrap_or_default()
}
