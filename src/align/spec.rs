use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::panel::Side;

/// Direction in which a group of panels is aligned.
///
/// `Horizontal` lines up panels placed side by side (top/bottom edges);
/// `Vertical` lines up panels stacked in a column (left/right edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignAxis {
    #[default]
    None,
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "hv")]
    Both,
}

impl AlignAxis {
    pub fn horizontal(&self) -> bool {
        matches!(self, AlignAxis::Horizontal | AlignAxis::Both)
    }

    pub fn vertical(&self) -> bool {
        matches!(self, AlignAxis::Vertical | AlignAxis::Both)
    }
}

impl FromStr for AlignAxis {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(AlignAxis::None),
            "h" => Ok(AlignAxis::Horizontal),
            "v" => Ok(AlignAxis::Vertical),
            "hv" | "vh" => Ok(AlignAxis::Both),
            other => Err(LayoutError::Config(format!("unknown alignment axis `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Side of the panel body the edge sits on within its layout table.
    pub fn side(&self) -> Side {
        match self {
            Edge::Left | Edge::Top => Side::Before,
            Edge::Right | Edge::Bottom => Side::After,
        }
    }

    /// Left/right live in the horizontal table, top/bottom in the vertical one.
    pub fn is_horizontal_table(&self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    fn letter(&self) -> char {
        match self {
            Edge::Left => 'l',
            Edge::Right => 'r',
            Edge::Top => 't',
            Edge::Bottom => 'b',
        }
    }
}

/// Subset of `{left, right, top, bottom}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeSet {
    bits: u8,
}

impl EdgeSet {
    pub const NONE: EdgeSet = EdgeSet { bits: 0 };
    pub const ALL: EdgeSet = EdgeSet { bits: 0b1111 };

    fn bit(edge: Edge) -> u8 {
        match edge {
            Edge::Left => 1,
            Edge::Right => 2,
            Edge::Top => 4,
            Edge::Bottom => 8,
        }
    }

    pub fn with(mut self, edge: Edge) -> Self {
        self.bits |= Self::bit(edge);
        self
    }

    pub fn contains(&self, edge: Edge) -> bool {
        self.bits & Self::bit(edge) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::ALL.into_iter().filter(|edge| self.contains(*edge))
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        iter.into_iter().fold(EdgeSet::NONE, EdgeSet::with)
    }
}

/// Accepts any combination of `l`, `r`, `t`, `b` (`"lr"`, `"tb"`, `"tblr"`, ...)
/// as well as `"none"`.
impl FromStr for EdgeSet {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" {
            return Ok(EdgeSet::NONE);
        }
        s.chars()
            .map(|ch| match ch {
                'l' => Ok(Edge::Left),
                'r' => Ok(Edge::Right),
                't' => Ok(Edge::Top),
                'b' => Ok(Edge::Bottom),
                other => Err(LayoutError::Config(format!("unknown edge `{other}` in `{s}`"))),
            })
            .collect()
    }
}

impl fmt::Display for EdgeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        self.iter().try_for_each(|edge| write!(f, "{}", edge.letter()))
    }
}

impl Serialize for EdgeSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EdgeSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Which axis to align and which edges to reconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlignmentSpec {
    pub axis: AlignAxis,
    #[serde(default)]
    pub edges: EdgeSet,
}

impl AlignmentSpec {
    pub fn new(axis: AlignAxis, edges: EdgeSet) -> Self {
        Self { axis, edges }
    }

    /// Parse the short forms, e.g. `AlignmentSpec::parse("hv", "tblr")`.
    pub fn parse(axis: &str, edges: &str) -> Result<Self, LayoutError> {
        Ok(Self::new(axis.parse()?, edges.parse()?))
    }

    /// Edges actually reconciled: those selected that belong to an active
    /// axis. An active axis with none of its edges selected aligns both.
    pub fn effective_edges(&self) -> EdgeSet {
        let mut edges = EdgeSet::NONE;
        if self.axis.horizontal() {
            edges = edges.merge_axis(self.edges, [Edge::Top, Edge::Bottom]);
        }
        if self.axis.vertical() {
            edges = edges.merge_axis(self.edges, [Edge::Left, Edge::Right]);
        }
        edges
    }
}

impl EdgeSet {
    fn merge_axis(self, requested: EdgeSet, axis_edges: [Edge; 2]) -> EdgeSet {
        let selected: Vec<Edge> = axis_edges
            .into_iter()
            .filter(|edge| requested.contains(*edge))
            .collect();
        let chosen = if selected.is_empty() {
            axis_edges.to_vec()
        } else {
            selected
        };
        chosen.into_iter().fold(self, EdgeSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        let edges: EdgeSet = "tblr".parse().unwrap();
        assert_eq!(edges, EdgeSet::ALL);
        let lr: EdgeSet = "lr".parse().unwrap();
        assert!(lr.contains(Edge::Left) && lr.contains(Edge::Right));
        assert!(!lr.contains(Edge::Top));
        assert!("lx".parse::<EdgeSet>().is_err());
        assert_eq!("hv".parse::<AlignAxis>().unwrap(), AlignAxis::Both);
    }

    #[test]
    fn horizontal_axis_uses_top_and_bottom_only() {
        let spec = AlignmentSpec::parse("h", "lb").unwrap();
        let edges = spec.effective_edges();
        assert_eq!(edges.iter().collect::<Vec<_>>(), vec![Edge::Bottom]);
    }

    #[test]
    fn axis_without_selected_edges_aligns_both_sides() {
        let spec = AlignmentSpec::parse("v", "").unwrap();
        assert_eq!(spec.effective_edges().to_string(), "lr");
        let spec = AlignmentSpec::parse("hv", "l").unwrap();
        assert_eq!(spec.effective_edges().to_string(), "ltb");
    }

    #[test]
    fn no_axis_means_no_edges() {
        let spec = AlignmentSpec::parse("none", "tblr").unwrap();
        assert!(spec.effective_edges().is_empty());
    }

    #[test]
    fn spec_round_trips_through_json() {
        let spec: AlignmentSpec = serde_json::from_str(r#"{"axis":"hv","edges":"tb"}"#).unwrap();
        assert_eq!(spec, AlignmentSpec::parse("hv", "tb").unwrap());
    }
}
