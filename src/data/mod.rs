//! Built-in mock datasets: the catalog provider for both modes, the fleet
//! snapshot, and the performance metrics.

pub mod metrics;
pub mod rail;
pub mod routes;
pub mod vehicles;

use crate::model::{Catalog, PerMode};

/// Built-in catalogs, one per mode
pub fn builtin_catalogs() -> PerMode<Catalog> {
    PerMode::new(routes::bus_routes(), rail::rail_catalog())
}
