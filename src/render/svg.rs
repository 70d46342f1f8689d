use std::fmt::Write as _;

use crate::{
    foundation::color::Color,
    foundation::core::{Point, Rect},
    render::surface::{DrawSurface, TextAnchor, TextStyle},
};

const FONT_FAMILY: &str = "'Source Sans Pro', sans-serif";

/// [`DrawSurface`] that accumulates an SVG document in memory.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    /// Empty surface; `background` fills the whole canvas when given.
    pub fn new(width: f64, height: f64, background: Option<Color>) -> Self {
        let mut s = Self {
            width,
            height,
            body: String::new(),
        };
        if let Some(bg) = background {
            s.fill_rect(Rect::new(0.0, 0.0, width, height), bg, 1.0);
        }
        s
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = num(self.width),
            h = num(self.height),
            body = self.body,
        )
    }
}

impl DrawSurface for SvgSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color, opacity: f64) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{}/>",
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height()),
            color.to_hex(),
            opacity_attr(opacity),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color, opacity: f64) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{}/>",
            num(center.x),
            num(center.y),
            num(radius),
            color.to_hex(),
            opacity_attr(opacity),
        );
    }

    fn text(&mut self, pos: Point, text: &str, style: &TextStyle) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let weight = if style.bold { " font-weight=\"600\"" } else { "" };
        let _ = writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\"{weight} text-anchor=\"{anchor}\" fill=\"{}\">{}</text>",
            num(pos.x),
            num(pos.y),
            num(style.size),
            style.color.to_hex(),
            escape(text),
        );
    }

    fn line(&mut self, a: Point, b: Point, color: Color, width: f64, dashed: bool) {
        let dash = if dashed {
            " stroke-dasharray=\"2 2\""
        } else {
            ""
        };
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{dash}/>",
            num(a.x),
            num(a.y),
            num(b.x),
            num(b.y),
            color.to_hex(),
            num(width),
        );
    }
}

fn opacity_attr(opacity: f64) -> String {
    if opacity >= 1.0 {
        String::new()
    } else {
        format!(" opacity=\"{}\"", num(opacity.max(0.0)))
    }
}

// Three decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
