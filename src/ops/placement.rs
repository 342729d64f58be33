//! Popup placement relative to an anchor control.
//!
//! Pure function over already-measured rectangles (terminal cells). The UI
//! calls it on every draw, so resizes, scrolls and open transitions all get
//! fresh inputs without the engine tracking any of them.

use ratatui::layout::Rect;

/// Gap kept between the popup and the viewport edge
pub const MARGIN: u16 = 1;

/// Screen-space box of the anchor control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl AnchorRect {
    pub fn top(&self) -> u16 {
        self.y
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

impl From<Rect> for AnchorRect {
    fn from(r: Rect) -> Self {
        AnchorRect {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
}

/// Where the popup goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// No anchor to position against; render nothing
    Hidden,
    Visible {
        side: Side,
        top: u16,
        left: u16,
        width: u16,
        max_height: u16,
    },
}

impl Placement {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Placement::Hidden)
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Placement::Hidden => None,
            Placement::Visible { side, .. } => Some(*side),
        }
    }

    /// Concrete rectangle for a popup with `content_rows` rows. The height is
    /// capped at `max_height`; an above-popup stays glued to the anchor top.
    pub fn fit(&self, content_rows: u16) -> Option<Rect> {
        match *self {
            Placement::Hidden => None,
            Placement::Visible {
                side,
                top,
                left,
                width,
                max_height,
            } => {
                let height = content_rows.min(max_height);
                if height == 0 || width == 0 {
                    return None;
                }
                let y = match side {
                    Side::Below => top,
                    Side::Above => top + (max_height - height),
                };
                Some(Rect::new(left, y, width, height))
            }
        }
    }
}

/// Decide which side of the anchor the popup opens on and how tall it may be.
///
/// Below is preferred; the popup flips above only when the room below is
/// short of `preferred_max_height` and the room above is strictly larger.
pub fn compute_placement(
    anchor: Option<AnchorRect>,
    viewport_height: u16,
    preferred_max_height: u16,
) -> Placement {
    let anchor = match anchor {
        Some(a) => a,
        None => return Placement::Hidden,
    };

    let space_below = viewport_height.saturating_sub(anchor.bottom());
    let space_above = anchor.top();

    let side = if space_below < preferred_max_height && space_above > space_below {
        Side::Above
    } else {
        Side::Below
    };

    let available = match side {
        Side::Below => space_below,
        Side::Above => space_above,
    };
    let max_height = preferred_max_height.min(available.saturating_sub(MARGIN));

    let top = match side {
        Side::Below => anchor.bottom(),
        Side::Above => anchor.top().saturating_sub(max_height),
    };

    Placement::Visible {
        side,
        top,
        left: anchor.x,
        width: anchor.width,
        max_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(y: u16, height: u16) -> AnchorRect {
        AnchorRect {
            x: 4,
            y,
            width: 30,
            height,
        }
    }

    #[test]
    fn no_anchor_is_hidden() {
        let p = compute_placement(None, 40, 10);
        assert_eq!(p, Placement::Hidden);
        assert!(!p.is_visible());
        assert_eq!(p.fit(5), None);
    }

    #[test]
    fn below_when_it_fits() {
        // bottom 8 + 10 <= 40
        let p = compute_placement(Some(anchor(5, 3)), 40, 10);
        assert_eq!(
            p,
            Placement::Visible {
                side: Side::Below,
                top: 8,
                left: 4,
                width: 30,
                max_height: 10,
            }
        );
    }

    #[test]
    fn exact_fit_stays_below_minus_margin() {
        // bottom 30 + 10 == 40: fits exactly, stays below, margin eats a row
        let p = compute_placement(Some(anchor(27, 3)), 40, 10);
        assert_eq!(p.side(), Some(Side::Below));
        if let Placement::Visible { max_height, .. } = p {
            assert_eq!(max_height, 9);
        }
    }

    #[test]
    fn flips_above_when_short_below_and_roomier_above() {
        let p = compute_placement(Some(anchor(32, 3)), 40, 10);
        assert_eq!(
            p,
            Placement::Visible {
                side: Side::Above,
                top: 22,
                left: 4,
                width: 30,
                max_height: 10,
            }
        );
    }

    #[test]
    fn stays_below_when_above_is_not_roomier() {
        // below: 40 - 20 = 20 < 25, above: 17 < 20
        let p = compute_placement(Some(anchor(17, 3)), 40, 25);
        assert_eq!(p.side(), Some(Side::Below));
        if let Placement::Visible { max_height, .. } = p {
            assert_eq!(max_height, 19);
        }
    }

    #[test]
    fn above_height_clamped_to_room() {
        // below: 0, above: 6 -> max_height 5
        let p = compute_placement(Some(anchor(6, 4)), 10, 12);
        assert_eq!(
            p,
            Placement::Visible {
                side: Side::Above,
                top: 1,
                left: 4,
                width: 30,
                max_height: 5,
            }
        );
    }

    #[test]
    fn anchor_below_viewport_does_not_panic() {
        let p = compute_placement(Some(anchor(50, 3)), 20, 10);
        assert_eq!(p.side(), Some(Side::Above));
    }

    #[test]
    fn fit_shrinks_and_glues_above_popup() {
        let p = compute_placement(Some(anchor(32, 3)), 40, 10);
        assert_eq!(p.fit(4), Some(Rect::new(4, 28, 30, 4)));
        assert_eq!(p.fit(50), Some(Rect::new(4, 22, 30, 10)));

        let below = compute_placement(Some(anchor(5, 3)), 40, 10);
        assert_eq!(below.fit(4), Some(Rect::new(4, 8, 30, 4)));
    }

    #[test]
    fn idempotent() {
        let a = Some(anchor(12, 3));
        assert_eq!(compute_placement(a, 30, 8), compute_placement(a, 30, 8));
    }
}
