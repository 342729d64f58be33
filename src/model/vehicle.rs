use serde::Serialize;

use super::mode::Mode;

/// Latitude/longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }
}

/// Schedule adherence of a tracked vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleStatus {
    OnTime,
    Late,
    OffRoute,
    Offline,
}

impl VehicleStatus {
    pub fn label(self) -> &'static str {
        match self {
            VehicleStatus::OnTime => "On time",
            VehicleStatus::Late => "Late",
            VehicleStatus::OffRoute => "Off route",
            VehicleStatus::Offline => "Offline",
        }
    }
}

/// A bus or train placed on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: String,
    pub mode: Mode,
    /// Route or rail line this vehicle is running on
    pub entity_id: String,
    pub position: GeoPoint,
    pub status: VehicleStatus,
}

/// Service health of a rail line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Ok,
    Delay,
    Issue,
}

/// Drawable rail line geometry
#[derive(Debug, Clone, PartialEq)]
pub struct RailLine {
    pub id: String,
    pub name: String,
    /// Hex color, e.g. "#22c55e"
    pub color: String,
    pub status: LineStatus,
    pub path: Vec<GeoPoint>,
}

/// Auxiliary marker: a bus stop or rail station
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub entity_id: String,
    pub name: String,
    pub position: GeoPoint,
}
