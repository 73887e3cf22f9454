//! `DrawList` to standalone SVG document.

use crate::{
    foundation::{
        core::{Point, Rgba8},
        error::ProtovizResult,
    },
    render::draw::{DrawList, DrawOp, Font, Glow, Stroke, TextAlign},
};

const FONT_FAMILY: &str = "sans-serif";

/// Serialize `list` as an SVG document sized to its surface.
///
/// Output is byte-for-byte stable for equal inputs.
#[tracing::instrument(skip(list), fields(ops = list.len()))]
pub fn to_svg(list: &DrawList) -> ProtovizResult<String> {
    let (w, h) = list.surface.pixel_size()?;
    let mut defs = Defs::default();
    let mut body = String::new();

    for op in &list.ops {
        match op {
            DrawOp::Clear { color } => {
                body.push_str(&format!(
                    "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\"{}/>\n",
                    paint("fill", Some(*color))
                ));
            }
            DrawOp::Rect {
                rect,
                radius,
                fill,
                stroke,
                glow,
            } => {
                let geom = format!(
                    "x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\"",
                    num(rect.x0),
                    num(rect.y0),
                    num(rect.width()),
                    num(rect.height()),
                    num(*radius)
                );
                if let Some(g) = glow {
                    let id = defs.glow(g);
                    body.push_str(&format!(
                        "<rect {geom}{} filter=\"url(#{id})\"/>\n",
                        paint("fill", Some(g.color.with_opacity(0.6)))
                    ));
                }
                body.push_str(&format!(
                    "<rect {geom}{}{}/>\n",
                    paint("fill", *fill),
                    stroke_attrs(stroke.as_ref())
                ));
            }
            DrawOp::Circle {
                center,
                radius,
                fill,
                stroke,
                glow,
            } => {
                let geom = format!(
                    "cx=\"{}\" cy=\"{}\" r=\"{}\"",
                    num(center.x),
                    num(center.y),
                    num(*radius)
                );
                if let Some(g) = glow {
                    let id = defs.glow(g);
                    body.push_str(&format!(
                        "<circle {geom}{} filter=\"url(#{id})\"/>\n",
                        paint("fill", Some(g.color.with_opacity(0.6)))
                    ));
                }
                body.push_str(&format!(
                    "<circle {geom}{}{}/>\n",
                    paint("fill", *fill),
                    stroke_attrs(stroke.as_ref())
                ));
            }
            DrawOp::Line {
                from,
                to,
                stroke,
                glow,
            } => {
                let geom = format!(
                    "x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
                    num(from.x),
                    num(from.y),
                    num(to.x),
                    num(to.y)
                );
                if let Some(g) = glow {
                    let id = defs.glow(g);
                    body.push_str(&format!(
                        "<line {geom}{} filter=\"url(#{id})\"/>\n",
                        stroke_attrs(Some(&Stroke { color: g.color, ..*stroke }))
                    ));
                }
                body.push_str(&format!("<line {geom}{}/>\n", stroke_attrs(Some(stroke))));
            }
            DrawOp::Polyline {
                points,
                closed,
                fill,
                stroke,
            } => {
                let tag = if *closed { "polygon" } else { "polyline" };
                body.push_str(&format!(
                    "<{tag} points=\"{}\"{}{} stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n",
                    point_list(points),
                    paint("fill", *fill),
                    stroke_attrs(stroke.as_ref())
                ));
            }
            DrawOp::Text {
                at,
                text,
                font,
                color,
                align,
            } => {
                body.push_str(&format!(
                    "<text x=\"{}\" y=\"{}\"{}{}>{}</text>\n",
                    num(at.x),
                    num(at.y),
                    font_attrs(*font, *align),
                    paint("fill", Some(*color)),
                    escape(text)
                ));
            }
            DrawOp::Trail { rect, from, to } => {
                let id = defs.gradient(*from, *to);
                body.push_str(&format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"url(#{id})\"/>\n",
                    num(rect.x0),
                    num(rect.y0),
                    num(rect.width()),
                    num(rect.height())
                ));
            }
        }
    }

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    );
    if !defs.body.is_empty() {
        out.push_str("<defs>\n");
        out.push_str(&defs.body);
        out.push_str("</defs>\n");
    }
    out.push_str(&body);
    out.push_str("</svg>\n");
    Ok(out)
}

#[derive(Default)]
struct Defs {
    body: String,
    next: usize,
}

impl Defs {
    fn glow(&mut self, g: &Glow) -> String {
        let id = format!("glow{}", self.next);
        self.next += 1;
        self.body.push_str(&format!(
            "<filter id=\"{id}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\"><feGaussianBlur stdDeviation=\"{}\"/></filter>\n",
            num(g.blur / 2.0)
        ));
        id
    }

    fn gradient(&mut self, from: Rgba8, to: Rgba8) -> String {
        let id = format!("trail{}", self.next);
        self.next += 1;
        self.body.push_str(&format!(
            "<linearGradient id=\"{id}\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\"><stop offset=\"0\" stop-color=\"{}\" stop-opacity=\"{}\"/><stop offset=\"1\" stop-color=\"{}\" stop-opacity=\"{}\"/></linearGradient>\n",
            from.hex(),
            num(from.opacity()),
            to.hex(),
            num(to.opacity())
        ));
        id
    }
}

fn paint(attr: &str, color: Option<Rgba8>) -> String {
    match color {
        None => format!(" {attr}=\"none\""),
        Some(c) if c.a == 255 => format!(" {attr}=\"{}\"", c.hex()),
        Some(c) => format!(
            " {attr}=\"{}\" {attr}-opacity=\"{}\"",
            c.hex(),
            num(c.opacity())
        ),
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    let Some(s) = stroke else {
        return String::new();
    };
    let mut out = paint("stroke", Some(s.color));
    out.push_str(&format!(" stroke-width=\"{}\"", num(s.width)));
    if let Some((dash, gap)) = s.dash {
        out.push_str(&format!(" stroke-dasharray=\"{} {}\"", num(dash), num(gap)));
    }
    out
}

fn font_attrs(font: Font, align: TextAlign) -> String {
    let anchor = match align {
        TextAlign::Start => "start",
        TextAlign::Middle => "middle",
        TextAlign::End => "end",
    };
    let weight = if font.bold { " font-weight=\"bold\"" } else { "" };
    format!(
        " font-family=\"{FONT_FAMILY}\" font-size=\"{}\"{weight} text-anchor=\"{anchor}\"",
        num(font.size)
    )
}

fn point_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed two-decimal formatting with trailing zeros trimmed.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
