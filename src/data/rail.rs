use crate::model::{Catalog, Entity, GeoPoint, LineStatus, RailLine, Stop};

// Rough Dallas core bounds, used to lay out the mock lines
const NORTH: f64 = 32.86;
const SOUTH: f64 = 32.70;
const WEST: f64 = -96.92;
const EAST: f64 = -96.65;

fn points(coords: &[(f64, f64)]) -> Vec<GeoPoint> {
    coords.iter().map(|&(lat, lon)| GeoPoint::new(lat, lon)).collect()
}

/// Built-in rail line geometry, in display order
pub fn rail_lines() -> Vec<RailLine> {
    vec![
        RailLine {
            id: "green".into(),
            name: "Green Line".into(),
            color: "#22c55e".into(),
            status: LineStatus::Ok,
            path: points(&[
                (NORTH, WEST + 0.12),
                (32.835, -96.84),
                (32.815, -96.83),
                (32.8, -96.82),
                (32.785, -96.81),
                (32.77, -96.8),
                (SOUTH + 0.01, WEST + 0.09),
            ]),
        },
        RailLine {
            id: "blue".into(),
            name: "Blue Line".into(),
            color: "#60a5fa".into(),
            status: LineStatus::Ok,
            path: points(&[
                (32.79, WEST + 0.01),
                (32.79, -96.88),
                (32.79, -96.86),
                (32.79, -96.83),
                (32.79, -96.8),
                (32.79, -96.77),
                (32.79, -96.73),
                (32.79, EAST - 0.02),
            ]),
        },
        RailLine {
            id: "red".into(),
            name: "Red Line".into(),
            color: "#f87171".into(),
            status: LineStatus::Delay,
            path: points(&[
                (NORTH - 0.01, -96.88),
                (32.845, -96.86),
                (32.83, -96.84),
                (32.815, -96.82),
                (32.8, -96.8),
                (32.785, -96.78),
                (32.77, -96.75),
                (32.74, -96.71),
            ]),
        },
        RailLine {
            id: "orange".into(),
            name: "Orange Line".into(),
            color: "#fb923c".into(),
            status: LineStatus::Ok,
            path: points(&[
                (32.82, -96.9),
                (32.81, -96.88),
                (32.8, -96.86),
                (32.79, -96.84),
                (32.78, -96.82),
                (32.77, -96.8),
                (32.76, -96.78),
                (32.75, -96.76),
            ]),
        },
        RailLine {
            id: "silver".into(),
            name: "Silver Line".into(),
            color: "#cbd5e1".into(),
            status: LineStatus::Issue,
            path: points(&[
                (32.745, -96.9),
                (32.76, -96.87),
                (32.78, -96.84),
                (32.8, -96.81),
                (32.82, -96.78),
                (32.835, -96.75),
                (32.85, -96.72),
            ]),
        },
    ]
}

/// The rail line catalog derived from the line geometry
pub fn rail_catalog() -> Catalog {
    Catalog::new(
        rail_lines()
            .into_iter()
            .map(|line| Entity::new(line.id, line.name))
            .collect(),
    )
}

/// One station marker at the first vertex of each line
pub fn rail_stations() -> Vec<Stop> {
    rail_lines()
        .into_iter()
        .filter_map(|line| {
            let position = *line.path.first()?;
            Some(Stop {
                entity_id: line.id,
                name: format!("{} terminus", line.name),
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_geometry_order() {
        let ids: Vec<String> = rail_catalog().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["green", "blue", "red", "orange", "silver"]);
    }

    #[test]
    fn every_line_gets_a_station() {
        assert_eq!(rail_stations().len(), rail_lines().len());
    }
}
