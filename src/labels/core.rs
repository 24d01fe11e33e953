use serde::{Deserialize, Serialize};

use crate::config::LabelDefaults;
use crate::error::{LayoutError, Result};
use crate::geometry::{Justify, Point, Rect};
use crate::layout::Cell;
use crate::render::TextStyle;

/// A value given once for every cell or once per labelled cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerCell<T> {
    One(T),
    Each(Vec<T>),
}

impl<T: Clone> PerCell<T> {
    /// Expand to exactly `count` values. A single value broadcasts; a
    /// sequence must have length 1 or `count`.
    pub fn resolve(&self, field: &'static str, count: usize) -> Result<Vec<T>> {
        match self {
            PerCell::One(value) => Ok(vec![value.clone(); count]),
            PerCell::Each(values) if values.len() == 1 => Ok(vec![values[0].clone(); count]),
            PerCell::Each(values) if values.len() == count => Ok(values.clone()),
            PerCell::Each(values) => Err(LayoutError::FieldLengthMismatch {
                field,
                expected: count,
                found: values.len(),
            }),
        }
    }
}

impl From<f64> for PerCell<f64> {
    fn from(value: f64) -> Self {
        PerCell::One(value)
    }
}

impl From<Vec<f64>> for PerCell<f64> {
    fn from(values: Vec<f64>) -> Self {
        PerCell::Each(values)
    }
}

impl<const N: usize> From<[f64; N]> for PerCell<f64> {
    fn from(values: [f64; N]) -> Self {
        PerCell::Each(values.to_vec())
    }
}

impl From<&str> for PerCell<String> {
    fn from(value: &str) -> Self {
        PerCell::One(value.to_string())
    }
}

impl From<String> for PerCell<String> {
    fn from(value: String) -> Self {
        PerCell::One(value)
    }
}

impl From<Vec<&str>> for PerCell<String> {
    fn from(values: Vec<&str>) -> Self {
        PerCell::Each(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for PerCell<String> {
    fn from(values: Vec<String>) -> Self {
        PerCell::Each(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
}

/// Where label text comes from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LabelSource {
    #[default]
    None,
    /// Sequential letters, one per supplied cell.
    Auto(LetterCase),
    /// Explicit texts; cells past the end stay unlabelled.
    Text(Vec<String>),
}

impl LabelSource {
    /// `"AUTO"` and `"auto"` select automatic lettering; anything else labels
    /// the first cell only.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "AUTO" => LabelSource::Auto(LetterCase::Upper),
            "auto" => LabelSource::Auto(LetterCase::Lower),
            other => LabelSource::Text(vec![other.to_string()]),
        }
    }

    /// Label texts for a grid of `cells` supplied cells.
    pub fn texts(&self, cells: usize) -> Vec<String> {
        match self {
            LabelSource::None => Vec::new(),
            LabelSource::Auto(case) => auto_labels(cells, *case),
            LabelSource::Text(texts) => texts.clone(),
        }
    }
}

impl From<&str> for LabelSource {
    fn from(raw: &str) -> Self {
        LabelSource::parse(raw)
    }
}

impl From<Vec<&str>> for LabelSource {
    fn from(texts: Vec<&str>) -> Self {
        LabelSource::Text(texts.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for LabelSource {
    fn from(texts: Vec<String>) -> Self {
        LabelSource::Text(texts)
    }
}

/// `A, B, ..., Z, AA, AB, ...` (or lowercase), starting from the first letter
/// on every call.
pub fn auto_labels(count: usize, case: LetterCase) -> Vec<String> {
    let base = match case {
        LetterCase::Upper => b'A',
        LetterCase::Lower => b'a',
    };
    (0..count)
        .map(|index| {
            let mut n = index + 1;
            let mut letters = Vec::new();
            while n > 0 {
                let rem = (n - 1) % 26;
                letters.push((base + rem as u8) as char);
                n = (n - 1) / 26;
            }
            letters.iter().rev().collect()
        })
        .collect()
}

/// Label options; every styling and positional field broadcasts.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub source: LabelSource,
    pub size: PerCell<f64>,
    pub x: PerCell<f64>,
    pub y: PerCell<f64>,
    pub hjust: PerCell<f64>,
    pub vjust: PerCell<f64>,
    pub family: Option<PerCell<String>>,
    pub face: Option<PerCell<String>>,
    pub color: Option<PerCell<String>>,
}

impl Default for LabelSpec {
    fn default() -> Self {
        Self::from_defaults(&LabelDefaults::default(), LabelSource::None)
    }
}

impl LabelSpec {
    pub fn new(source: impl Into<LabelSource>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn from_defaults(defaults: &LabelDefaults, source: LabelSource) -> Self {
        Self {
            source,
            size: PerCell::One(defaults.size),
            x: PerCell::One(defaults.x),
            y: PerCell::One(defaults.y),
            hjust: PerCell::One(defaults.hjust),
            vjust: PerCell::One(defaults.vjust),
            family: defaults.family.clone().map(PerCell::One),
            face: defaults.face.clone().map(PerCell::One),
            color: defaults.color.clone().map(PerCell::One),
        }
    }

    pub fn size(mut self, size: impl Into<PerCell<f64>>) -> Self {
        self.size = size.into();
        self
    }

    pub fn x(mut self, x: impl Into<PerCell<f64>>) -> Self {
        self.x = x.into();
        self
    }

    pub fn y(mut self, y: impl Into<PerCell<f64>>) -> Self {
        self.y = y.into();
        self
    }

    pub fn hjust(mut self, hjust: impl Into<PerCell<f64>>) -> Self {
        self.hjust = hjust.into();
        self
    }

    pub fn vjust(mut self, vjust: impl Into<PerCell<f64>>) -> Self {
        self.vjust = vjust.into();
        self
    }

    pub fn family(mut self, family: impl Into<PerCell<String>>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn face(mut self, face: impl Into<PerCell<String>>) -> Self {
        self.face = Some(face.into());
        self
    }

    pub fn color(mut self, color: impl Into<PerCell<String>>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Resolve into one label per labelled cell, in cell order. Texts past
    /// the last cell are dropped.
    pub fn resolve(&self, cells: usize) -> Result<Vec<Label>> {
        let mut texts = self.source.texts(cells);
        texts.truncate(cells);
        let count = texts.len();
        if count == 0 {
            return Ok(Vec::new());
        }

        let sizes = self.size.resolve("label_size", count)?;
        let xs = self.x.resolve("label_x", count)?;
        let ys = self.y.resolve("label_y", count)?;
        let hjusts = self.hjust.resolve("hjust", count)?;
        let vjusts = self.vjust.resolve("vjust", count)?;
        let families = resolve_optional(&self.family, "label_fontfamily", count)?;
        let faces = resolve_optional(&self.face, "label_fontface", count)?;
        let colors = resolve_optional(&self.color, "label_colour", count)?;

        Ok(texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Label {
                text,
                style: TextStyle {
                    size: sizes[i],
                    family: families[i].clone(),
                    face: faces[i].clone(),
                    color: colors[i].clone(),
                },
                x: xs[i],
                y: ys[i],
                justify: Justify::new(hjusts[i], vjusts[i]),
            })
            .collect())
    }
}

fn resolve_optional(
    field: &Option<PerCell<String>>,
    name: &'static str,
    count: usize,
) -> Result<Vec<Option<String>>> {
    match field {
        Some(values) => Ok(values.resolve(name, count)?.into_iter().map(Some).collect()),
        None => Ok(vec![None; count]),
    }
}

/// A resolved label attached to one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub style: TextStyle,
    /// Relative anchor inside the cell, 0 = left, 1 = right.
    pub x: f64,
    /// Relative anchor inside the cell, 0 = bottom, 1 = top.
    pub y: f64,
    pub justify: Justify,
}

/// Attach labels to `cells` in order. Auto labels cover every supplied cell,
/// empty ones included.
pub fn annotate(mut cells: Vec<Cell>, spec: &LabelSpec) -> Result<Vec<Cell>> {
    let labels = spec.resolve(cells.len())?;
    for (cell, label) in cells.iter_mut().zip(labels) {
        cell.label = Some(label);
    }
    Ok(cells)
}

/// Anchor point of `label` inside a cell box.
pub fn label_anchor(bounds: Rect, label: &Label) -> Point {
    Point::new(
        bounds.x + label.x * bounds.width,
        bounds.y + (1.0 - label.y) * bounds.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::Picture;

    fn cells(n: usize) -> Vec<Cell> {
        (0..n)
            .map(|i| Cell::new(Picture::new(format!("p{i}"), "x").into_ref()))
            .collect()
    }

    fn texts(cells: &[Cell]) -> Vec<Option<String>> {
        cells
            .iter()
            .map(|c| c.label.as_ref().map(|l| l.text.clone()))
            .collect()
    }

    #[test]
    fn auto_labels_roll_over() {
        let labels = auto_labels(28, LetterCase::Upper);
        assert_eq!(labels[0], "A");
        assert_eq!(labels[25], "Z");
        assert_eq!(labels[26], "AA");
        assert_eq!(labels[27], "AB");
        assert_eq!(auto_labels(2, LetterCase::Lower), vec!["a", "b"]);
    }

    #[test]
    fn auto_covers_empty_cells() {
        let input = vec![
            Cell::new(Picture::new("p", "x").into_ref()),
            Cell::empty(),
            Cell::empty(),
            Cell::new(Picture::new("q", "x").into_ref()),
        ];
        let labelled = annotate(input, &LabelSpec::new("AUTO")).unwrap();
        assert_eq!(
            texts(&labelled),
            vec![
                Some("A".into()),
                Some("B".into()),
                Some("C".into()),
                Some("D".into())
            ]
        );
    }

    #[test]
    fn scalar_text_labels_first_cell_only() {
        let labelled = annotate(cells(3), &LabelSpec::new("Fig")).unwrap();
        assert_eq!(texts(&labelled), vec![Some("Fig".into()), None, None]);
    }

    #[test]
    fn short_sequence_leaves_trailing_cells() {
        let labelled = annotate(cells(3), &LabelSpec::new(vec!["i", "ii"])).unwrap();
        assert_eq!(texts(&labelled), vec![Some("i".into()), Some("ii".into()), None]);
    }

    #[test]
    fn fields_broadcast_or_match() {
        let spec = LabelSpec::new("auto").hjust([0.0, 1.0, 2.0]).color("red");
        let labelled = annotate(cells(3), &spec).unwrap();
        let last = labelled[2].label.as_ref().unwrap();
        assert_eq!(last.justify.h, 2.0);
        assert_eq!(last.justify.v, 1.5);
        assert_eq!(last.style.color.as_deref(), Some("red"));
        assert_eq!(last.style.face.as_deref(), Some("bold"));
        assert_eq!(last.style.size, 14.0);
    }

    #[test]
    fn mismatched_field_length_is_rejected() {
        let spec = LabelSpec::new(vec!["A", "B"]).hjust([1.0, 2.0, 3.0]);
        let err = annotate(cells(2), &spec).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::FieldLengthMismatch {
                field: "hjust",
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn surplus_texts_do_not_count_towards_field_length() {
        let spec = LabelSpec::new(vec!["A", "B", "C"]).hjust([0.0, 1.0]);
        let labelled = annotate(cells(2), &spec).unwrap();
        assert_eq!(texts(&labelled), vec![Some("A".into()), Some("B".into())]);
        assert_eq!(labelled[1].label.as_ref().unwrap().justify.h, 1.0);

        let err = annotate(cells(2), &LabelSpec::new(vec!["A", "B", "C"]).hjust([0.0, 1.0, 2.0]))
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::FieldLengthMismatch {
                field: "hjust",
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn no_source_attaches_nothing() {
        let labelled = annotate(cells(2), &LabelSpec::default().hjust([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(texts(&labelled), vec![None, None]);
    }

    #[test]
    fn anchor_uses_relative_position() {
        let label = LabelSpec::new("A").x(0.25).y(0.75).resolve(1).unwrap().remove(0);
        let anchor = label_anchor(Rect::new(10.0, 20.0, 40.0, 8.0), &label);
        assert_eq!(anchor, Point::new(20.0, 22.0));
    }
}
