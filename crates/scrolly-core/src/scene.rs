// File: crates/scrolly-core/src/scene.rs
// Summary: Display list produced by one render pass; the unit the SVG and PNG backends consume.

use skia_safe as skia;

use crate::dataset::Group;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Straight stroke: axis domain lines and tick marks.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub class: &'static str,
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub color: skia::Color,
    pub width: f32,
}

/// One group's line, split into runs of consecutive non-null points.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLine {
    pub group: Group,
    pub segments: Vec<Vec<(f32, f32)>>,
    pub color: skia::Color,
    pub width: f32,
    pub highlighted: bool,
}

impl SeriesLine {
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

/// Text placed at its baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub class: &'static str,
    pub at: (f32, f32),
    pub text: String,
    pub anchor: Anchor,
    pub color: skia::Color,
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Rule(Rule),
    Series(SeriesLine),
    Label(Label),
}

/// Everything drawn for one frame. A new render replaces the whole scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn blank(width: i32, height: i32, background: skia::Color) -> Self {
        Self { width, height, background, elements: Vec::new() }
    }

    pub fn is_blank(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn series(&self) -> impl Iterator<Item = &SeriesLine> {
        self.elements.iter().filter_map(|e| match e {
            Element::Series(s) => Some(s),
            _ => None,
        })
    }

    pub fn series_for(&self, group: Group) -> Option<&SeriesLine> {
        self.series().find(|s| s.group == group)
    }

    /// Groups drawn with emphasis in this frame (at most one).
    pub fn highlighted(&self) -> Vec<Group> {
        self.series().filter(|s| s.highlighted).map(|s| s.group).collect()
    }

    pub fn labels<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.elements.iter().filter_map(move |e| match e {
            Element::Label(l) if l.class == class => Some(l.text.as_str()),
            _ => None,
        })
    }

    pub fn rules<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.elements.iter().filter_map(move |e| match e {
            Element::Rule(r) if r.class == class => Some(r),
            _ => None,
        })
    }
}
