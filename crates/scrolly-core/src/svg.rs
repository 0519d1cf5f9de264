// File: crates/scrolly-core/src/svg.rs
// Summary: Serialize a scene as a standalone SVG document.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::scene::{Anchor, Element, Label, Rule, Scene, SeriesLine};
use crate::theme::hex;

/// Append `v` with at most two decimals, trailing zeros trimmed.
pub(crate) fn fmt_num_into(out: &mut String, v: f32) {
    let v = if v.abs() < 0.005 { 0.0 } else { v };
    let start = out.len();
    let _ = write!(out, "{v:.2}");
    if out[start..].contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }
}

fn fmt_num(v: f32) -> String {
    let mut s = String::new();
    fmt_num_into(&mut s, v);
    s
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let mut start = 0usize;
    for (i, b) in text.bytes().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[start..i]);
        out.push_str(esc);
        start = i + 1;
    }
    out.push_str(&text[start..]);
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_xml_into(&mut out, text);
    out
}

/// SVG path data for a series: one `M..L..` run per segment; a lone point closes on itself.
pub fn path_data(segments: &[Vec<(f32, f32)>]) -> String {
    let mut d = String::new();
    for seg in segments {
        for (i, &(x, y)) in seg.iter().enumerate() {
            d.push(if i == 0 { 'M' } else { 'L' });
            fmt_num_into(&mut d, x);
            d.push(',');
            fmt_num_into(&mut d, y);
        }
        if seg.len() == 1 {
            d.push('Z');
        }
    }
    d
}

impl Scene {
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(512 + self.elements.len() * 96);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );
        let _ = write!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, hex(self.background));
        for el in &self.elements {
            match el {
                Element::Rule(r) => write_rule(&mut out, r),
                Element::Series(s) => write_series(&mut out, s),
                Element::Label(l) => write_label(&mut out, l),
            }
        }
        out.push_str("</svg>\n");
        out
    }

    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }
}

fn write_rule(out: &mut String, r: &Rule) {
    let _ = write!(
        out,
        r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        r.class,
        fmt_num(r.from.0),
        fmt_num(r.from.1),
        fmt_num(r.to.0),
        fmt_num(r.to.1),
        hex(r.color),
        fmt_num(r.width),
    );
}

fn write_series(out: &mut String, s: &SeriesLine) {
    let class = if s.highlighted { "line highlighted" } else { "line" };
    let _ = write!(
        out,
        r#"<path class="{class}" data-group="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round" stroke-linecap="round" d="{}"/>"#,
        s.group,
        hex(s.color),
        fmt_num(s.width),
        path_data(&s.segments),
    );
}

fn write_label(out: &mut String, l: &Label) {
    let anchor = match l.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let _ = write!(
        out,
        r#"<text class="{}" x="{}" y="{}" text-anchor="{anchor}" font-family="sans-serif" font-size="{}" fill="{}">"#,
        l.class,
        fmt_num(l.at.0),
        fmt_num(l.at.1),
        fmt_num(l.size),
        hex(l.color),
    );
    escape_xml_into(out, &l.text);
    out.push_str("</text>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_num(60.0), "60");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
        assert_eq!(fmt_num(-0.001), "0");
    }

    #[test]
    fn path_data_breaks_on_gaps() {
        let d = path_data(&[vec![(0.0, 1.0), (2.0, 3.0)], vec![(4.5, 5.0)]]);
        assert_eq!(d, "M0,1L2,3M4.5,5Z");
        assert_eq!(path_data(&[]), "");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"a<b & "c""#), "a&lt;b &amp; &quot;c&quot;");
    }
}
