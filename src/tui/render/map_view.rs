use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as Segment, Points};
use ratatui::widgets::{Block, Borders};

use crate::model::{Mode, RailLine, Stop, Vehicle, VehicleStatus};
use crate::ops::kpi::visible_vehicles;
use crate::tui::app::App;

/// Dallas service area, as (min, max) longitude and latitude
pub const LON_BOUNDS: [f64; 2] = [-96.95, -96.62];
pub const LAT_BOUNDS: [f64; 2] = [32.68, 32.88];

const VEHICLE_GLYPH: &str = "\u{25CF}";

/// What the map draws for the active mode and filter
#[derive(Debug, Default)]
pub struct MapLayers<'a> {
    pub lines: Vec<&'a RailLine>,
    pub vehicles: Vec<&'a Vehicle>,
    pub stops: Vec<&'a Stop>,
}

pub fn map_layers(app: &App) -> MapLayers<'_> {
    let mode = app.mode();
    let visible = app.store.visible_entity_ids(mode);

    let lines = match mode {
        Mode::Rail => app
            .rail_lines
            .iter()
            .filter(|l| visible.contains(&l.id))
            .collect(),
        Mode::Bus => Vec::new(),
    };

    let stops = if app.store.show_auxiliary_markers() {
        app.stops
            .get(mode)
            .iter()
            .filter(|s| visible.contains(&s.entity_id))
            .collect()
    } else {
        Vec::new()
    };

    MapLayers {
        lines,
        vehicles: visible_vehicles(&app.vehicles, mode, &visible),
        stops,
    }
}

/// Render the live network map with a status legend along the bottom border
pub fn render_map(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let layers = map_layers(app);

    let title = Span::styled(
        format!(" Live network map \u{00B7} {} ", app.mode()),
        Style::default().fg(theme.text_bright).bg(bg),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel).bg(bg))
        .title(title)
        .title_bottom(legend(app))
        .style(Style::default().bg(bg));

    let stop_coords: Vec<(f64, f64)> = layers
        .stops
        .iter()
        .map(|s| (s.position.lon, s.position.lat))
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .background_color(bg)
        .marker(Marker::Braille)
        .x_bounds(LON_BOUNDS)
        .y_bounds(LAT_BOUNDS)
        .paint(|ctx| {
            for line in &layers.lines {
                let color = theme.line_color(&line.color);
                for pair in line.path.windows(2) {
                    ctx.draw(&Segment {
                        x1: pair[0].lon,
                        y1: pair[0].lat,
                        x2: pair[1].lon,
                        y2: pair[1].lat,
                        color,
                    });
                }
            }
            if !stop_coords.is_empty() {
                ctx.draw(&Points {
                    coords: &stop_coords,
                    color: theme.stop,
                });
            }
            ctx.layer();
            for v in &layers.vehicles {
                ctx.print(
                    v.position.lon,
                    v.position.lat,
                    Span::styled(
                        VEHICLE_GLYPH,
                        Style::default().fg(theme.status_color(v.status)),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn legend(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for status in [
        VehicleStatus::OnTime,
        VehicleStatus::Late,
        VehicleStatus::OffRoute,
        VehicleStatus::Offline,
    ] {
        spans.push(Span::styled(
            VEHICLE_GLYPH,
            Style::default().fg(app.theme.status_color(status)).bg(bg),
        ));
        spans.push(Span::styled(
            format!(" {}  ", status.label()),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }
    Line::from(spans)
}
