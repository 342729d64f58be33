use indexmap::IndexSet;
use serde::Serialize;

use crate::model::{Mode, Vehicle, VehicleStatus};

/// Counts shown in the KPI panel for the current filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KpiSummary {
    /// Vehicles tracking on visible routes/lines (offline ones excluded)
    pub active: usize,
    pub on_time: usize,
    pub late: usize,
    pub off_route: usize,
}

/// Vehicles of `mode` running on one of the `visible` entities
pub fn visible_vehicles<'a>(
    vehicles: &'a [Vehicle],
    mode: Mode,
    visible: &IndexSet<String>,
) -> Vec<&'a Vehicle> {
    vehicles
        .iter()
        .filter(|v| v.mode == mode && visible.contains(&v.entity_id))
        .collect()
}

pub fn summarize(vehicles: &[&Vehicle]) -> KpiSummary {
    let mut summary = KpiSummary::default();
    for v in vehicles {
        match v.status {
            VehicleStatus::OnTime => summary.on_time += 1,
            VehicleStatus::Late => summary.late += 1,
            VehicleStatus::OffRoute => summary.off_route += 1,
            VehicleStatus::Offline => continue,
        }
        summary.active += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vehicles::vehicles;

    fn ids(v: &[&str]) -> IndexSet<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_only_visible_routes() {
        let fleet = vehicles();
        let visible = visible_vehicles(&fleet, Mode::Bus, &ids(&["001"]));
        assert_eq!(visible.len(), 2);
        let kpi = summarize(&visible);
        assert_eq!(
            kpi,
            KpiSummary {
                active: 2,
                on_time: 1,
                late: 1,
                off_route: 0,
            }
        );
    }

    #[test]
    fn offline_vehicles_are_not_active() {
        let fleet = vehicles();
        let visible = visible_vehicles(&fleet, Mode::Bus, &ids(&["047"]));
        assert_eq!(visible.len(), 1);
        assert_eq!(summarize(&visible), KpiSummary::default());
    }

    #[test]
    fn mode_is_respected() {
        let fleet = vehicles();
        // "green" is a rail id; nothing in bus mode runs on it
        assert!(visible_vehicles(&fleet, Mode::Bus, &ids(&["green"])).is_empty());
        assert_eq!(visible_vehicles(&fleet, Mode::Rail, &ids(&["green"])).len(), 2);
    }
}
