use crate::airfoil::designation::NacaDesignation;
use itertools::Itertools;
use ncollide2d::na::Point2;

/// Placement of an outline inside a preview image: points are scaled, then shifted by the
/// padding, with y flipped about the baseline so positive y draws upwards.
#[derive(Debug, Clone, Copy)]
pub struct PreviewFrame {
    pub scale: f64,
    pub padding: f64,
    pub baseline: f64,
}

impl Default for PreviewFrame {
    fn default() -> Self {
        PreviewFrame {
            scale: 3.0,
            padding: 10.0,
            baseline: 100.0,
        }
    }
}

impl PreviewFrame {
    pub fn to_image(&self, p: &Point2<f64>) -> Point2<f64> {
        Point2::new(
            p.x * self.scale + self.padding,
            self.baseline - p.y * self.scale + self.padding,
        )
    }
}

/// Renders the outline as the `d` attribute of a closed SVG path
pub fn svg_path(outline: &[Point2<f64>], frame: &PreviewFrame) -> String {
    if outline.is_empty() {
        return String::new();
    }

    let body = outline
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let q = frame.to_image(p);
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{}{:.2} {:.2}", cmd, q.x, q.y)
        })
        .join(" ");
    format!("{} Z", body)
}

/// Wraps the path in a standalone SVG document
pub fn svg_document(outline: &[Point2<f64>], frame: &PreviewFrame) -> String {
    let (width, height) = match outline.iter().map(|p| frame.to_image(p)).fold(
        None,
        |acc: Option<(f64, f64)>, q| {
            let (w, h) = acc.unwrap_or((0.0, 0.0));
            Some((w.max(q.x), h.max(q.y)))
        },
    ) {
        Some((w, h)) => (w + frame.padding, h + frame.padding),
        None => (0.0, 0.0),
    };

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\">\
         <path d=\"{}\" fill=\"#90caf9\" stroke=\"#1976d2\" stroke-width=\"2\"/></svg>",
        width.ceil(),
        height.ceil(),
        svg_path(outline, frame)
    )
}

/// The file name offered when saving a generated program
pub fn download_name(designation: &NacaDesignation) -> String {
    format!("wing_{}.gcode", designation)
}
