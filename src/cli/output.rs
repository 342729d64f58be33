use serde::Serialize;

use crate::model::{Entity, Mode};
use crate::ops::kpi::KpiSummary;
use crate::util::unicode::display_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct EntityListJson<'a> {
    pub mode: Mode,
    /// Catalog size before filtering
    pub total: usize,
    pub entities: Vec<&'a Entity>,
}

#[derive(Serialize)]
pub struct KpiJson {
    pub mode: Mode,
    /// Ids the counts were taken over (the whole catalog when nothing was
    /// selected)
    pub visible: Vec<String>,
    #[serde(flatten)]
    pub kpi: KpiSummary,
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line per entity: id padded to the widest id, then the label and any
/// secondary text in parentheses
pub fn format_entity_lines(entities: &[&Entity]) -> Vec<String> {
    let width = entities
        .iter()
        .map(|e| display_width(&e.id))
        .max()
        .unwrap_or(0);
    entities
        .iter()
        .map(|e| {
            let pad = " ".repeat(width - display_width(&e.id));
            match &e.secondary {
                Some(s) if s != &e.id => format!("{}{}  {} ({})", e.id, pad, e.label, s),
                _ => format!("{}{}  {}", e.id, pad, e.label),
            }
        })
        .collect()
}

pub fn format_kpi(mode: Mode, visible: usize, kpi: &KpiSummary) -> Vec<String> {
    vec![
        format!("{} \u{00B7} {} visible", mode, visible),
        format!("  active     {}", kpi.active),
        format!("  on time    {}", kpi.on_time),
        format!("  late       {}", kpi.late),
        format!("  off route  {}", kpi.off_route),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entity_lines_align_ids() {
        let a = Entity::new("005", "Love Field Shuttle").with_secondary("005");
        let b = Entity::new("green", "Green Line").with_secondary("Ok");
        let lines = format_entity_lines(&[&a, &b]);
        assert_eq!(
            lines,
            vec![
                "005    Love Field Shuttle".to_string(),
                "green  Green Line (Ok)".to_string(),
            ]
        );
    }

    #[test]
    fn empty_list_formats_to_nothing() {
        assert!(format_entity_lines(&[]).is_empty());
    }

    #[test]
    fn kpi_json_is_flat() {
        let json = KpiJson {
            mode: Mode::Rail,
            visible: vec!["green".into()],
            kpi: KpiSummary {
                active: 2,
                on_time: 2,
                late: 0,
                off_route: 0,
            },
        };
        let value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["mode"], "rail");
        assert_eq!(value["active"], 2);
        assert_eq!(value["visible"][0], "green");
    }
}
