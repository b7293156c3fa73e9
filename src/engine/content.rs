//! Content area resolution from the right and bottom edges.

use serde::Serialize;

use crate::types::{Rect, Tick, TickColour};

/// Content insets measured from the interior edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    /// Derive insets from a content rectangle inside an interior of the given size.
    pub fn from_content(content: Rect, interior_w: u32, interior_h: u32) -> Self {
        Self {
            left: content.x,
            top: content.y,
            right: interior_w.saturating_sub(content.right()),
            bottom: interior_h.saturating_sub(content.bottom()),
        }
    }
}

/// Resolve the content rectangle in interior coordinates.
///
/// The horizontal extent comes from red runs on the bottom edge and the
/// vertical extent from red runs on the right edge. Disjoint runs are
/// merged into their bounding interval. An edge without red runs makes the
/// whole interior content along that axis.
pub fn resolve(right: &[Tick], bottom: &[Tick], bitmap_w: u32, bitmap_h: u32) -> Rect {
    let interior_w = bitmap_w.saturating_sub(2);
    let interior_h = bitmap_h.saturating_sub(2);

    let (x, width) = red_extent(bottom, interior_w);
    let (y, height) = red_extent(right, interior_h);

    Rect::new(x, y, width, height)
}

/// Bounding interval of the red runs, as (start, length).
fn red_extent(ticks: &[Tick], extent: u32) -> (u32, u32) {
    let bounds = ticks
        .iter()
        .filter(|t| t.colour == TickColour::Red && t.length > 0)
        .fold(None, |acc: Option<(u32, u32)>, t| {
            let (lo, hi) = acc.unwrap_or((t.start, t.end()));
            Some((lo.min(t.start), hi.max(t.end())))
        });

    match bounds {
        Some((lo, hi)) => {
            let lo = lo.min(extent);
            let hi = hi.min(extent);
            (lo, hi - lo)
        }
        None => (0, extent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edge;

    fn red(edge: Edge, start: u32, length: u32) -> Tick {
        Tick::new(edge, start, length, TickColour::Red)
    }

    #[test]
    fn test_no_ticks_full_interior() {
        assert_eq!(resolve(&[], &[], 7, 5), Rect::new(0, 0, 5, 3));
    }

    #[test]
    fn test_transparent_ticks_full_interior() {
        let right = [Tick::new(Edge::Right, 0, 3, TickColour::Transparent)];
        let bottom = [Tick::new(Edge::Bottom, 0, 5, TickColour::Transparent)];
        assert_eq!(resolve(&right, &bottom, 7, 5), Rect::new(0, 0, 5, 3));
    }

    #[test]
    fn test_both_edges() {
        let right = [red(Edge::Right, 1, 2)];
        let bottom = [red(Edge::Bottom, 2, 3)];
        assert_eq!(resolve(&right, &bottom, 10, 6), Rect::new(2, 1, 3, 2));
    }

    #[test]
    fn test_one_edge_defaults_other_axis() {
        let bottom = [red(Edge::Bottom, 1, 2)];
        assert_eq!(resolve(&[], &bottom, 6, 6), Rect::new(1, 0, 2, 4));
    }

    #[test]
    fn test_disjoint_runs_unioned() {
        let bottom = [red(Edge::Bottom, 1, 1), red(Edge::Bottom, 5, 2)];
        assert_eq!(resolve(&[], &bottom, 10, 4), Rect::new(1, 0, 6, 2));
    }

    #[test]
    fn test_other_ticks_ignored() {
        let bottom = [Tick::new(Edge::Bottom, 0, 2, TickColour::Other), red(Edge::Bottom, 3, 1)];
        assert_eq!(resolve(&[], &bottom, 7, 4), Rect::new(3, 0, 1, 2));
    }

    #[test]
    fn test_padding_from_content() {
        let padding = Padding::from_content(Rect::new(2, 1, 3, 2), 8, 6);
        assert_eq!(
            padding,
            Padding {
                left: 2,
                top: 1,
                right: 3,
                bottom: 3
            }
        );
    }
}
