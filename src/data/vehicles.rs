use crate::model::{GeoPoint, Mode, Vehicle, VehicleStatus};

/// (vehicle id, mode, route or line, lat, lon, status)
const VEHICLES: &[(&str, Mode, &str, f64, f64, VehicleStatus)] = &[
    ("BUS-101", Mode::Bus, "001", 32.7830, -96.7885, VehicleStatus::OnTime),
    ("BUS-114", Mode::Bus, "001", 32.7961, -96.8051, VehicleStatus::Late),
    ("BUS-203", Mode::Bus, "203", 32.7700, -96.8100, VehicleStatus::Late),
    ("BUS-227", Mode::Bus, "005", 32.8398, -96.8490, VehicleStatus::OnTime),
    ("BUS-240", Mode::Bus, "009", 32.7502, -96.8225, VehicleStatus::OnTime),
    ("BUS-256", Mode::Bus, "013", 32.7760, -96.7992, VehicleStatus::OffRoute),
    ("BUS-261", Mode::Bus, "025", 32.7385, -96.8811, VehicleStatus::OnTime),
    ("BUS-288", Mode::Bus, "047", 32.7120, -96.8398, VehicleStatus::Offline),
    ("BUS-301", Mode::Bus, "105", 32.8577, -96.8655, VehicleStatus::OnTime),
    ("BUS-315", Mode::Bus, "315", 32.7767, -96.7970, VehicleStatus::OnTime),
    ("BUS-408", Mode::Bus, "408", 32.7421, -96.7633, VehicleStatus::Late),
    ("TRN-G1", Mode::Rail, "green", 32.8150, -96.8300, VehicleStatus::OnTime),
    ("TRN-G2", Mode::Rail, "green", 32.7700, -96.8000, VehicleStatus::OnTime),
    ("TRN-B1", Mode::Rail, "blue", 32.7900, -96.8600, VehicleStatus::OnTime),
    ("TRN-R1", Mode::Rail, "red", 32.8300, -96.8400, VehicleStatus::Late),
    ("TRN-O1", Mode::Rail, "orange", 32.7900, -96.8400, VehicleStatus::OnTime),
    ("TRN-S1", Mode::Rail, "silver", 32.8000, -96.8100, VehicleStatus::OffRoute),
];

/// Mock fleet snapshot for both modes
pub fn vehicles() -> Vec<Vehicle> {
    VEHICLES
        .iter()
        .map(|&(id, mode, entity, lat, lon, status)| Vehicle {
            id: id.to_string(),
            mode,
            entity_id: entity.to_string(),
            position: GeoPoint::new(lat, lon),
            status,
        })
        .collect()
}
