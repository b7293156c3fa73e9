//! Border ticks: run-length encoded marker pixels along one edge.

use std::fmt;

use serde::Serialize;

use super::Colour;

/// One of the four border edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Left,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Right, Edge::Bottom];

    /// Top and left edges carry stretch markers.
    pub fn is_stretch(self) -> bool {
        matches!(self, Edge::Top | Edge::Left)
    }

    /// Right and bottom edges carry content markers.
    pub fn is_content(self) -> bool {
        !self.is_stretch()
    }

    /// The marker colour this edge expects.
    pub fn marker(self) -> Colour {
        if self.is_stretch() {
            Colour::BLACK
        } else {
            Colour::RED
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::Top => "top",
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Classification of a run of border pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickColour {
    Transparent,
    /// Stretch marker (top/left only).
    Black,
    /// Content marker (right/bottom only).
    Red,
    /// Anything else: a malformed marker.
    Other,
}

impl TickColour {
    pub fn is_transparent(self) -> bool {
        self == TickColour::Transparent
    }
}

/// A contiguous run of identically classified pixels on one edge.
///
/// `start` is an interior offset: the first non-corner pixel of an edge is
/// offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tick {
    pub edge: Edge,
    pub start: u32,
    pub length: u32,
    pub colour: TickColour,
}

impl Tick {
    pub const fn new(edge: Edge, start: u32, length: u32, colour: TickColour) -> Self {
        Self {
            edge,
            start,
            length,
            colour,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> u32 {
        self.start + self.length
    }

    /// Check whether this tick shares at least one offset with `[start, end)`.
    pub fn overlaps(&self, start: u32, end: u32) -> bool {
        self.length > 0 && self.start < end && start < self.end()
    }

    /// Check whether this tick covers all of `[start, end)`.
    pub fn covers(&self, start: u32, end: u32) -> bool {
        self.start <= start && end <= self.end()
    }
}

/// The four ordered tick sequences of a bitmap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickSet {
    pub top: Vec<Tick>,
    pub left: Vec<Tick>,
    pub right: Vec<Tick>,
    pub bottom: Vec<Tick>,
}

impl TickSet {
    /// Ticks for one edge.
    pub fn edge(&self, edge: Edge) -> &[Tick] {
        match edge {
            Edge::Top => &self.top,
            Edge::Left => &self.left,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
        }
    }

    /// Iterate over every tick, edge by edge.
    pub fn iter(&self) -> impl Iterator<Item = &Tick> {
        Edge::ALL.into_iter().flat_map(move |e| self.edge(e).iter())
    }

    /// All ticks classified as `Other`.
    pub fn malformed(&self) -> Vec<Tick> {
        self.iter()
            .filter(|t| t.colour == TickColour::Other)
            .copied()
            .collect()
    }
}
