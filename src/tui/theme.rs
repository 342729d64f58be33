use ratatui::style::Color;

use crate::model::{LineStatus, UiConfig, VehicleStatus};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub on_time: Color,
    pub late: Color,
    pub off_route: Color,
    pub offline: Color,
    pub stop: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
    pub chart: Color,
    pub chart_alt: Color,
    pub bar: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0B, 0x11, 0x20),
            panel: Color::Rgb(0x33, 0x41, 0x55),
            text: Color::Rgb(0xCB, 0xD5, 0xE1),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x63, 0x66, 0xF1),
            dim: Color::Rgb(0x64, 0x74, 0x8B),
            on_time: Color::Rgb(0x22, 0xC5, 0x5E),
            late: Color::Rgb(0xF9, 0x73, 0x16),
            off_route: Color::Rgb(0xF4, 0x3F, 0x5E),
            offline: Color::Rgb(0x64, 0x74, 0x8B),
            stop: Color::Rgb(0xE2, 0xE8, 0xF0),
            selection_bg: Color::Rgb(0x1E, 0x29, 0x3B),
            search_match_bg: Color::Rgb(0x22, 0xD3, 0xEE),
            search_match_fg: Color::Rgb(0x0B, 0x11, 0x20),
            chart: Color::Rgb(0x22, 0xD3, 0xEE),
            chart_alt: Color::Rgb(0x34, 0xD3, 0x99),
            bar: Color::Rgb(0xA7, 0x8B, 0xFA),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "panel" => theme.panel = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "on_time" => theme.on_time = color,
                    "late" => theme.late = color,
                    "off_route" => theme.off_route = color,
                    "offline" => theme.offline = color,
                    "stop" => theme.stop = color,
                    "selection_bg" => theme.selection_bg = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    "chart" => theme.chart = color,
                    "chart_alt" => theme.chart_alt = color,
                    "bar" => theme.bar = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Marker color for a vehicle status
    pub fn status_color(&self, status: VehicleStatus) -> Color {
        match status {
            VehicleStatus::OnTime => self.on_time,
            VehicleStatus::Late => self.late,
            VehicleStatus::OffRoute => self.off_route,
            VehicleStatus::Offline => self.offline,
        }
    }

    pub fn line_status_color(&self, status: LineStatus) -> Color {
        match status {
            LineStatus::Ok => self.on_time,
            LineStatus::Delay => self.late,
            LineStatus::Issue => self.off_route,
        }
    }

    /// Rail line color from its hex string, falling back to text color
    pub fn line_color(&self, hex: &str) -> Color {
        parse_hex_color(hex).unwrap_or(self.text)
    }
}
