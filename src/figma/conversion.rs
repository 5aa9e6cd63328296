//! Classification of raw Figma API nodes into typed domain nodes.
//!
//! Classification is total: missing style fields take documented defaults,
//! unknown keywords fall back to the neutral variant, and unknown node types
//! become [`NodeKind::Generic`].

use std::collections::HashMap;

use crate::types::{
    Bounds, DesignNode, Effect, EffectKind, FrameProps, ImageProps, LetterSpacing,
    LetterSpacingUnit, LineHeight, LineHeightUnit, NodeKind, Offset, Rgb, Rgba, SolidFill,
    TextAlignHorizontal, TextAlignVertical, TextAutoResize, TextCase, TextDecoration, TextProps,
};

use super::api_types::{FigmaBoundingBox, FigmaEffectData, FigmaNodeData, FigmaPaintData};

const DEFAULT_FONT_FAMILY: &str = "Inter";
const DEFAULT_FONT_STYLE: &str = "Regular";
const DEFAULT_FONT_WEIGHT: f64 = 400.0;
const DEFAULT_FONT_SIZE: f64 = 16.0;
const AUTO_LINE_HEIGHT: f64 = 1.2;

/// Name fragments that mark a rectangle as an image placeholder.
const IMAGE_NAME_HINTS: &[&str] = &["image", "img", "photo", "picture"];

/// Resolved bitmap URLs keyed by node id.
pub type ImageUrls = HashMap<String, String>;

/// Classify a raw node and its subtree.
pub fn classify(node: &FigmaNodeData, image_urls: &ImageUrls) -> DesignNode {
    let children = node
        .children
        .iter()
        .map(|child| classify(child, image_urls))
        .collect();

    let kind = match node.node_type.as_str() {
        "TEXT" => NodeKind::Text(map_text(node)),
        "FRAME" => NodeKind::Frame(FrameProps {
            background_color: node.background_color.map(|c| Rgb {
                r: c.r,
                g: c.g,
                b: c.b,
            }),
            fills: first_solid_fill(&node.fills).into_iter().collect(),
            corner_radius: node.corner_radius,
        }),
        _ if is_image_node(node, image_urls) => NodeKind::Image(ImageProps {
            image_url: image_urls.get(&node.id).cloned().unwrap_or_default(),
        }),
        other => NodeKind::Generic {
            node_type: other.to_string(),
        },
    };

    let bbox = node.absolute_bounding_box.map(map_bounding_box);
    let mirror = bbox.unwrap_or_default();

    DesignNode {
        id: node.id.clone(),
        name: node.name.clone(),
        x: node.x.unwrap_or(mirror.x),
        y: node.y.unwrap_or(mirror.y),
        width: node.width.unwrap_or(mirror.width),
        height: node.height.unwrap_or(mirror.height),
        absolute_bounding_box: bbox,
        rotation: node.rotation,
        opacity: node.opacity,
        visible: node.visible,
        kind,
        children,
    }
}

/// Collect, in pre-order, the ids of every node the image heuristic matches.
///
/// The API client resolves these to bitmap URLs before [`classify`] runs.
pub fn collect_image_node_ids(node: &FigmaNodeData) -> Vec<String> {
    let mut ids = Vec::new();
    collect_image_ids_into(node, &mut ids);
    ids
}

fn collect_image_ids_into(node: &FigmaNodeData, acc: &mut Vec<String>) {
    if looks_like_image(node) {
        acc.push(node.id.clone());
    }
    for child in &node.children {
        collect_image_ids_into(child, acc);
    }
}

fn is_image_node(node: &FigmaNodeData, image_urls: &ImageUrls) -> bool {
    if node.node_type != "RECTANGLE" {
        return false;
    }
    image_urls.get(&node.id).is_some_and(|url| !url.is_empty()) || looks_like_image(node)
}

/// Rectangle whose name mentions an image, or which carries an image fill.
///
/// Deliberately fuzzy: "background-image-frame" matches too.
fn looks_like_image(node: &FigmaNodeData) -> bool {
    if node.node_type != "RECTANGLE" {
        return false;
    }
    let name = node.name.to_lowercase();
    let name_hint = IMAGE_NAME_HINTS.iter().any(|hint| name.contains(hint));
    name_hint
        || node
            .fills
            .iter()
            .any(|fill| fill.paint_type.eq_ignore_ascii_case("IMAGE"))
}

fn map_text(node: &FigmaNodeData) -> TextProps {
    let style = node.style.clone().unwrap_or_default();

    TextProps {
        characters: node.characters.clone().unwrap_or_default(),
        font_family: style
            .font_family
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        font_style: style
            .font_style
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_FONT_STYLE.to_string()),
        font_weight: non_zero(style.font_weight).unwrap_or(DEFAULT_FONT_WEIGHT),
        font_size: non_zero(style.font_size).unwrap_or(DEFAULT_FONT_SIZE),
        line_height: map_line_height(
            style.line_height_px,
            style.line_height_percent_font_size,
            style.line_height_percent,
        ),
        letter_spacing: LetterSpacing {
            value: non_zero(style.letter_spacing).unwrap_or(0.0),
            unit: LetterSpacingUnit::Pixels,
        },
        fills: vec![first_solid_fill(&node.fills).unwrap_or_default()],
        text_align_horizontal: keyword(style.text_align_horizontal, TextAlignHorizontal::from_keyword),
        text_align_vertical: keyword(style.text_align_vertical, TextAlignVertical::from_keyword),
        text_decoration: keyword(style.text_decoration, TextDecoration::from_keyword),
        text_case: keyword(style.text_case, TextCase::from_keyword),
        text_auto_resize: keyword(style.text_auto_resize, TextAutoResize::from_keyword),
        effects: node.effects.iter().map(map_effect).collect(),
    }
}

/// Pixels win over percent-of-font-size, which wins over plain percent.
fn map_line_height(
    pixels: Option<f64>,
    percent_font_size: Option<f64>,
    percent: Option<f64>,
) -> LineHeight {
    if let Some(value) = non_zero(pixels) {
        return LineHeight {
            value,
            unit: LineHeightUnit::Pixels,
        };
    }
    if let Some(value) = non_zero(percent_font_size).or_else(|| non_zero(percent)) {
        return LineHeight {
            value,
            unit: LineHeightUnit::Percent,
        };
    }
    LineHeight {
        value: AUTO_LINE_HEIGHT,
        unit: LineHeightUnit::Auto,
    }
}

/// First SOLID paint that carries a color.
///
/// Alpha comes from the color's `a` channel, then the paint opacity, then 1;
/// zero values count as absent.
fn first_solid_fill(fills: &[FigmaPaintData]) -> Option<SolidFill> {
    let fill = fills
        .iter()
        .find(|fill| fill.paint_type == "SOLID" && fill.color.is_some())?;
    let color = fill.color?;

    Some(SolidFill {
        color: Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        },
        opacity: non_zero(color.a)
            .or_else(|| non_zero(fill.opacity))
            .unwrap_or(1.0),
        blend_mode: fill
            .blend_mode
            .clone()
            .unwrap_or_else(|| "NORMAL".to_string()),
    })
}

fn map_effect(effect: &FigmaEffectData) -> Effect {
    Effect {
        kind: EffectKind::from_keyword(&effect.effect_type),
        visible: effect.visible != Some(false),
        color: effect.color.map(|c| Rgba {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a.unwrap_or(1.0),
        }),
        offset: effect.offset.map(|o| Offset { x: o.x, y: o.y }),
        radius: effect.radius.unwrap_or(0.0),
    }
}

fn map_bounding_box(bb: FigmaBoundingBox) -> Bounds {
    Bounds::new(bb.x, bb.y, bb.width, bb.height)
}

fn keyword<T: Default>(value: Option<String>, parse: fn(&str) -> T) -> T {
    value.as_deref().map(parse).unwrap_or_default()
}

fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
