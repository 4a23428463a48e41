use std::fmt::{self, Write};

use crate::config::CanvasConfig;
use crate::model::tier::ColorTier;
use crate::render::geometry::{Face, FaceKind, Point};

const STYLE: &str = r#"  <defs>
    <style>
      .cube { transition: opacity 0.2s; }
      .cube:hover { opacity: 0.75; }
      .cube polygon { stroke: #ffffff; stroke-width: 0.2; stroke-opacity: 0.3; }
    </style>
  </defs>
"#;

/// One unit cube of a stack, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeShape {
    pub count: u32,
    pub date: String,
    pub level: u32,
    pub tier: ColorTier,
    pub faces: [Face; 3],
}

impl CubeShape {
    fn fill(&self, kind: FaceKind) -> &'static str {
        match kind {
            FaceKind::Top => self.tier.top,
            FaceKind::Left => self.tier.left,
            FaceKind::Right => self.tier.right,
        }
    }
}

/// Collects cube shapes and writes the SVG document in a single pass.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    canvas: CanvasConfig,
    cubes: Vec<CubeShape>,
}

impl SvgBuilder {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self {
            canvas,
            cubes: Vec::new(),
        }
    }

    pub fn push_cube(&mut self, cube: CubeShape) {
        self.cubes.push(cube);
    }

    pub fn cubes(&self) -> &[CubeShape] {
        &self.cubes
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_header(out)?;
        for cube in &self.cubes {
            write_cube(out, cube)?;
        }
        out.write_str("  </g>\n</svg>\n")
    }

    pub fn finish(self) -> String {
        let mut svg = String::new();
        self.write_to(&mut svg).expect("writing to a String cannot fail");
        svg
    }

    fn write_header<W: Write>(&self, out: &mut W) -> fmt::Result {
        let c = &self.canvas;
        writeln!(
            out,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            w = c.width,
            h = c.height
        )?;
        out.write_str(STYLE)?;
        writeln!(
            out,
            r#"  <g transform="translate({}, {})">"#,
            num(c.offset_x),
            num(c.offset_y)
        )
    }
}

fn write_cube<W: Write>(out: &mut W, cube: &CubeShape) -> fmt::Result {
    writeln!(
        out,
        r#"    <g class="cube" data-count="{}" data-date="{}" data-level="{}">"#,
        cube.count,
        escape_attr(&cube.date),
        cube.level
    )?;
    for face in &cube.faces {
        write!(
            out,
            r#"      <polygon class="{}" fill="{}" points=""#,
            face.kind.class_name(),
            cube.fill(face.kind)
        )?;
        write_points(out, &face.points)?;
        out.write_str("\"/>\n")?;
    }
    out.write_str("    </g>\n")
}

fn write_points<W: Write>(out: &mut W, points: &[Point]) -> fmt::Result {
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{},{}", num(p.x), num(p.y))?;
    }
    Ok(())
}

/// Two-decimal coordinate; folds `-0.00` into `0.00`.
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

fn escape_attr(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::cube_faces;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(0.0), "0.00");
        assert_eq!(num(-0.001), "0.00");
        assert_eq!(num(3.4641016), "3.46");
        assert_eq!(num(-3.4641016), "-3.46");
        assert_eq!(num(100.0), "100.00");
    }

    #[test]
    fn test_empty_document() {
        let svg = SvgBuilder::new(CanvasConfig::default()).finish();
        assert!(svg.starts_with(r#"<svg width="800" height="400" viewBox="0 0 800 400""#));
        assert!(svg.contains("<style>"));
        assert!(svg.contains(".cube:hover"));
        assert!(svg.contains(r#"<g transform="translate(100.00, 50.00)">"#));
        assert!(svg.ends_with("  </g>\n</svg>\n"));
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn test_cube_markup() {
        let canvas = CanvasConfig::default();
        let mut builder = SvgBuilder::new(canvas);
        builder.push_cube(CubeShape {
            count: 5,
            date: "2024-01-01".to_string(),
            level: 0,
            tier: ColorTier::MEDIUM_GREEN,
            faces: cube_faces(Point::new(0.0, 0.0), 0.0, &canvas),
        });
        assert_eq!(builder.cubes().len(), 1);

        let svg = builder.finish();
        assert!(svg.contains(r#"<g class="cube" data-count="5" data-date="2024-01-01" data-level="0">"#));
        assert!(svg.contains(
            r##"<polygon class="cube-top" fill="#40c463" points="0.00,0.00 3.46,2.00 0.00,4.00 -3.46,2.00"/>"##
        ));
        assert!(svg.contains(
            r##"<polygon class="cube-left" fill="#30a14e" points="-3.46,2.00 0.00,4.00 0.00,8.00 -3.46,6.00"/>"##
        ));
        assert!(svg.contains(
            r##"<polygon class="cube-right" fill="#216e39" points="0.00,4.00 3.46,2.00 3.46,6.00 0.00,8.00"/>"##
        ));
    }

    #[test]
    fn test_date_is_escaped() {
        assert_eq!(escape_attr(r#"a"<b>&"#), "a&quot;&lt;b&gt;&amp;");
    }
}
