//! SVG rendering of a layout plan.
//!
//! World coordinates are feet with +Y up; SVG is pixels with +Y down. The
//! renderer maps every point explicitly instead of relying on a transform
//! attribute so stroke widths stay in pixel units.

use sprinklerkit_core::{Bounds, SprinklerPlacement};
use sprinklerkit_layout::Region;

/// Rendering parameters.
#[derive(Debug, Clone, Copy)]
pub struct SvgOptions {
    /// Pixels per foot.
    pub scale: f64,
    /// Margin around the drawing, in feet.
    pub margin: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale: 10.0,
            margin: 12.0,
        }
    }
}

/// Renders the usable area and its placements as a standalone SVG document.
pub fn render_layout(
    region: &Region,
    sprinklers: &[SprinklerPlacement],
    options: &SvgOptions,
) -> String {
    let bounds = drawing_bounds(region, sprinklers);
    let scale = options.scale;
    let margin = options.margin;

    let width = (bounds.width() + 2.0 * margin) * scale;
    let height = (bounds.height() + 2.0 * margin) * scale;

    let to_x = |x: f64| (x - bounds.min_x + margin) * scale;
    let to_y = |y: f64| (bounds.max_y - y + margin) * scale;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.2} {height:.2}">"#
    ));
    svg.push('\n');

    for poly in region.polygons() {
        let mut path = String::new();
        append_ring_path(&mut path, &poly.outer, &to_x, &to_y);
        for hole in &poly.holes {
            append_ring_path(&mut path, hole, &to_x, &to_y);
        }
        svg.push_str(&format!(
            r##"<path d="{path}" fill="#c8e6c9" stroke="#2e7d32" stroke-width="1.5" fill-rule="evenodd"/>"##
        ));
        svg.push('\n');
    }

    for head in sprinklers {
        let cx = to_x(head.x);
        let cy = to_y(head.y);
        let r = head.radius * scale;

        if head.is_full_circle() {
            svg.push_str(&format!(
                r##"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="#2196f3" fill-opacity="0.2" stroke="#1565c0" stroke-width="0.5"/>"##
            ));
        } else {
            let start = head.direction.to_radians();
            let end = (head.direction + head.angle).to_radians();
            let x1 = to_x(head.x + head.radius * start.cos());
            let y1 = to_y(head.y + head.radius * start.sin());
            let x2 = to_x(head.x + head.radius * end.cos());
            let y2 = to_y(head.y + head.radius * end.sin());
            let large_arc = if head.angle > 180.0 { 1 } else { 0 };

            // The y-flip turns a counterclockwise world arc into sweep=0.
            svg.push_str(&format!(
                r##"<path d="M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {x2:.2} {y2:.2} Z" fill="#2196f3" fill-opacity="0.3" stroke="#1565c0" stroke-width="0.5"/>"##
            ));
        }
        svg.push('\n');

        svg.push_str(&format!(
            r##"<circle cx="{cx:.2}" cy="{cy:.2}" r="2" fill="#000000"/>"##
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn append_ring_path(
    path: &mut String,
    ring: &[sprinklerkit_core::Point],
    to_x: &impl Fn(f64) -> f64,
    to_y: &impl Fn(f64) -> f64,
) {
    for (i, p) in ring.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{} {:.2} {:.2} ", cmd, to_x(p.x), to_y(p.y)));
    }
    if !ring.is_empty() {
        path.push_str("Z ");
    }
}

/// Drawing extent: region bounds expanded to include every head's throw.
fn drawing_bounds(region: &Region, sprinklers: &[SprinklerPlacement]) -> Bounds {
    let mut bounds = region.bounds();

    for head in sprinklers {
        let b = Bounds::new(
            head.x - head.radius,
            head.y - head.radius,
            head.x + head.radius,
            head.y + head.radius,
        );
        bounds = Some(match bounds {
            Some(mut merged) => {
                merged.merge(&b);
                merged
            }
            None => b,
        });
    }

    bounds.unwrap_or(Bounds::new(0.0, 0.0, 1.0, 1.0))
}
