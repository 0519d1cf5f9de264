// File: crates/scrolly-core/src/page.rs
// Summary: Standalone HTML page: sticky chart container plus the narrative sections.

use std::fmt::Write as _;

use crate::steps::Section;
use crate::svg::{escape_xml, escape_xml_into};

const STYLE: &str = "body{margin:0;font-family:sans-serif}\
.scrolly{display:flex;gap:2rem;padding:0 2rem}\
.sticky{position:sticky;top:2rem;align-self:flex-start}\
.steps{flex:1}\
.step{min-height:80vh;display:flex;flex-direction:column;justify-content:center}";

/// Page with `chart_svg` inside the sticky container and one `<section data-step>` per section.
///
/// The page is static: it embeds a single frame and carries no script, so the
/// `data-step` attributes only mark where each step begins. Per-step frames are
/// produced by [`ScrollDriver`](crate::observer::ScrollDriver).
pub fn render_page(title: &str, sections: &[Section], chart_svg: &str) -> String {
    let mut out = String::with_capacity(1024 + chart_svg.len());
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n",
        escape_xml(title),
    );
    out.push_str("<div class=\"scrolly\">\n<figure class=\"sticky\" id=\"chart\">\n");
    out.push_str(chart_svg.trim_end());
    out.push_str("\n</figure>\n<article class=\"steps\">\n");
    for s in sections {
        let _ = write!(out, "<section class=\"step\" data-step=\"{}\">\n<h2>", s.step.id());
        escape_xml_into(&mut out, s.heading);
        out.push_str("</h2>\n<p>");
        escape_xml_into(&mut out, s.body);
        out.push_str("</p>\n</section>\n");
    }
    out.push_str("</article>\n</div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::SECTIONS;

    #[test]
    fn page_carries_every_step_attribute() {
        let html = render_page("Assets & race", &SECTIONS, "<svg></svg>\n");
        for id in ["intro", "national", "insights", "policy"] {
            assert!(html.contains(&format!("data-step=\"{id}\"")), "missing {id}");
        }
        assert!(html.contains("<title>Assets &amp; race</title>"));
        assert!(html.contains("<figure class=\"sticky\" id=\"chart\">\n<svg></svg>\n</figure>"));
        assert!(!html.contains("<script"), "page is static");
    }
}
