//! Placement of a node relative to the root container.

use crate::config::ConversionOptions;
use crate::types::{
    Bounds, DesignNode, ElementPosition, NodeKind, TextAlignHorizontal, TextAlignVertical,
};

use super::color::fixed;

/// Offsets applied by `translate()`, in percent of the element's own box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Translate {
    x: i32,
    y: i32,
}

/// Compute left/top/width/height and transform for `node`.
///
/// Percentages are always measured against `container`, which must have a
/// non-zero extent; `convert` rejects degenerate containers before calling this.
pub fn compute_position(
    node: &DesignNode,
    container: Bounds,
    options: &ConversionOptions,
) -> ElementPosition {
    let el = node.bounds();
    let rel_x = (el.x - container.x) / container.width;
    let rel_y = (el.y - container.y) / container.height;
    let rel_w = el.width / container.width;
    let rel_h = el.height / container.height;

    let (x, y, translate) = match &node.kind {
        NodeKind::Text(text) => {
            let (x, tx) = match text.text_align_horizontal {
                TextAlignHorizontal::Left | TextAlignHorizontal::Justified => (rel_x, 0),
                TextAlignHorizontal::Center => (rel_x + rel_w / 2.0, -50),
                TextAlignHorizontal::Right => (rel_x + rel_w, -100),
            };
            let (y, ty) = match text.text_align_vertical {
                TextAlignVertical::Top => (rel_y, 0),
                TextAlignVertical::Center => (rel_y + rel_h / 2.0, -50),
                TextAlignVertical::Bottom => (rel_y + rel_h, -100),
            };
            (x, y, Translate { x: tx, y: ty })
        }
        _ => (rel_x, rel_y, Translate::default()),
    };

    let precision = options.precision;
    let (width, height) = if options.enable_responsive {
        (
            format!("{}%", fixed(rel_w * 100.0, precision)),
            format!("{}%", fixed(rel_h * 100.0, precision)),
        )
    } else {
        let scale = options.scale_factor;
        (
            format!("{}px", fixed(el.width * scale, precision)),
            format!("{}px", fixed(el.height * scale, precision)),
        )
    };

    let transform = transform_for(translate, node.rotation);
    let transform_origin = transform.as_ref().map(|_| "left top".to_string());

    ElementPosition {
        x: format!("{}%", fixed(x * 100.0, precision)),
        y: format!("{}%", fixed(y * 100.0, precision)),
        width,
        height,
        transform,
        transform_origin,
    }
}

fn transform_for(translate: Translate, rotation: Option<f64>) -> Option<String> {
    let mut terms = Vec::with_capacity(2);
    if translate != Translate::default() {
        terms.push(format!("translate({}%, {}%)", translate.x, translate.y));
    }
    // Figma rotates counter-clockwise, CSS clockwise.
    if let Some(deg) = rotation.filter(|r| *r != 0.0 && r.is_finite()) {
        terms.push(format!("rotate({:.2}deg)", -deg));
    }
    (!terms.is_empty()).then(|| terms.join(" "))
}
