use crate::model::{Catalog, Entity, GeoPoint, Stop};

/// (number, name) for the built-in bus routes, in display order
const BUS_ROUTES: &[(&str, &str)] = &[
    ("001", "Malcolm X \u{2014} Maple"),
    ("003", "Ross"),
    ("005", "Love Field Shuttle"),
    ("009", "Jefferson Gaston"),
    ("013", "Ervay"),
    ("018", "Samuel"),
    ("025", "Cockrell Hill North"),
    ("038", "Ledbetter"),
    ("041", "Bonnie View"),
    ("047", "Polk"),
    ("057", "Westmoreland"),
    ("105", "Northwest Hwy"),
    ("203", "Ridgecrest"),
    ("315", "BUS-315"),
    ("408", "BUS-408"),
];

/// (route, stop name, lat, lon)
const BUS_STOPS: &[(&str, &str, f64, f64)] = &[
    ("001", "Malcolm X @ Elm", 32.7815, -96.7842),
    ("001", "Maple @ Cedar Springs", 32.8012, -96.8105),
    ("005", "Love Field Terminal", 32.8471, -96.8518),
    ("005", "Inwood Station", 32.8210, -96.8417),
    ("009", "Jefferson @ Zang", 32.7478, -96.8241),
    ("013", "Ervay @ Commerce", 32.7795, -96.7980),
    ("025", "Cockrell Hill Transfer", 32.7360, -96.8870),
    ("047", "Polk @ Kiest", 32.7065, -96.8420),
    ("105", "Northwest Hwy @ Marsh", 32.8600, -96.8700),
    ("315", "Downtown West", 32.7767, -96.7970),
];

/// The built-in bus route catalog. Labels are the route names; the route
/// number is carried as the secondary text.
pub fn bus_routes() -> Catalog {
    Catalog::new(
        BUS_ROUTES
            .iter()
            .map(|(number, name)| Entity::new(*number, *name).with_secondary(*number))
            .collect(),
    )
}

pub fn bus_stops() -> Vec<Stop> {
    BUS_STOPS
        .iter()
        .map(|(route, name, lat, lon)| Stop {
            entity_id: route.to_string(),
            name: name.to_string(),
            position: GeoPoint::new(*lat, *lon),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_catalog_has_fifteen_routes_in_order() {
        let catalog = bus_routes();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.entities()[0].id, "001");
        assert_eq!(catalog.entities()[14].id, "408");
    }

    #[test]
    fn every_stop_belongs_to_a_route() {
        let catalog = bus_routes();
        for stop in bus_stops() {
            assert!(catalog.contains(&stop.entity_id), "{}", stop.name);
        }
    }
}
