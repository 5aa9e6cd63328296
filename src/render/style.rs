//! CSS declarations for a node's typography, fills, and effects.

use indexmap::IndexSet;

use crate::config::ConversionOptions;
use crate::types::{
    DesignNode, EffectKind, FrameProps, LetterSpacingUnit, LineHeight, LineHeightUnit, NodeKind,
    StyleMap, TextAlignHorizontal, TextAutoResize, TextCase, TextDecoration, TextProps,
};

use super::color::{css_number, rgb, rgb_or_rgba, rgba, rgba_of};

/// Font families seen during one conversion, in first-use order.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    families: IndexSet<String>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, family: &str) {
        if !self.families.contains(family) {
            self.families.insert(family.to_string());
        }
    }

    pub fn used_fonts(&self) -> Vec<String> {
        self.families.iter().cloned().collect()
    }
}

/// Build the semantic declarations for `node` (position properties excluded).
///
/// Text nodes record their font family in `fonts`.
pub fn extract_styles(
    node: &DesignNode,
    options: &ConversionOptions,
    fonts: &mut FontRegistry,
) -> StyleMap {
    let mut styles = StyleMap::new();
    set(&mut styles, "position", "absolute");

    if let Some(opacity) = node.opacity.filter(|o| *o != 1.0) {
        set(&mut styles, "opacity", css_number(opacity));
    }
    if node.visible == Some(false) {
        set(&mut styles, "display", "none");
    }

    match &node.kind {
        NodeKind::Frame(frame) => add_frame_styles(frame, &mut styles),
        NodeKind::Text(text) => {
            add_text_styles(text, &mut styles, fonts);
            if options.preserve_text_effects {
                add_effect_styles(text, &mut styles);
            }
        }
        NodeKind::Image(_) | NodeKind::Generic { .. } => {}
    }

    styles
}

fn set(styles: &mut StyleMap, key: &str, value: impl Into<String>) {
    styles.insert(key.to_string(), value.into());
}

fn add_frame_styles(frame: &FrameProps, styles: &mut StyleMap) {
    if let Some(color) = frame.background_color {
        set(styles, "background-color", rgb(color));
    }
    if let Some(fill) = frame.fills.first() {
        set(styles, "background-color", rgba(fill.color, fill.opacity));
        if let Some(mode) = blend_mode(&fill.blend_mode) {
            set(styles, "mix-blend-mode", mode);
        }
    }
    if let Some(radius) = frame.corner_radius.filter(|r| *r != 0.0) {
        set(styles, "border-radius", format!("{}px", css_number(radius)));
    }
}

fn add_text_styles(text: &TextProps, styles: &mut StyleMap, fonts: &mut FontRegistry) {
    set(styles, "margin-top", "0px");
    set(styles, "margin-bottom", "0px");

    set(styles, "font-family", font_family(&text.font_family));
    let italic = text.font_style.contains("Italic");
    set(styles, "font-style", if italic { "italic" } else { "normal" });
    fonts.record(&text.font_family);

    set(styles, "font-weight", css_number(text.font_weight));
    set(styles, "font-size", format!("{}px", css_number(text.font_size)));
    set(styles, "line-height", line_height(text.line_height));

    let spacing = text.letter_spacing;
    let letter_spacing = match spacing.unit {
        LetterSpacingUnit::Percent if spacing.value > 0.0 => css_number(spacing.value / 100.0),
        _ => format!("{}px", css_number(spacing.value)),
    };
    set(styles, "letter-spacing", letter_spacing);

    if let Some(fill) = text.fills.first() {
        set(styles, "color", rgb_or_rgba(fill.color, fill.opacity));
        if let Some(mode) = blend_mode(&fill.blend_mode) {
            set(styles, "mix-blend-mode", mode);
        }
    }

    // Non-default keywords are emitted as the lower-cased API names.
    let decoration = match text.text_decoration {
        TextDecoration::None => None,
        TextDecoration::Underline => Some("underline"),
        TextDecoration::Strikethrough => Some("strikethrough"),
    };
    if let Some(decoration) = decoration {
        set(styles, "text-decoration", decoration);
    }

    let transform = match text.text_case {
        TextCase::Original => None,
        TextCase::Upper => Some("upper"),
        TextCase::Lower => Some("lower"),
        TextCase::Title => Some("title"),
    };
    if let Some(transform) = transform {
        set(styles, "text-transform", transform);
    }

    let align = match text.text_align_horizontal {
        TextAlignHorizontal::Left => None,
        TextAlignHorizontal::Center => Some("center"),
        TextAlignHorizontal::Right => Some("right"),
        TextAlignHorizontal::Justified => Some("justified"),
    };
    if let Some(align) = align {
        set(styles, "text-align", align);
    }

    if text.text_auto_resize == TextAutoResize::WidthAndHeight {
        set(styles, "white-space", "nowrap");
    }
}

fn add_effect_styles(text: &TextProps, styles: &mut StyleMap) {
    let shadows: Vec<String> = text
        .effects
        .iter()
        .filter(|effect| effect.visible && effect.kind == EffectKind::DropShadow)
        .filter_map(|effect| {
            let offset = effect.offset?;
            let color = effect.color?;
            Some(format!(
                "{}px {}px {}px {}",
                css_number(offset.x),
                css_number(offset.y),
                css_number(effect.radius),
                rgba_of(color)
            ))
        })
        .collect();
    if !shadows.is_empty() {
        set(styles, "text-shadow", shadows.join(", "));
    }

    // Only the first visible blur is honored.
    if let Some(blur) = text
        .effects
        .iter()
        .find(|effect| effect.visible && effect.kind == EffectKind::LayerBlur)
    {
        let value = format!("blur({}px)", css_number(blur.radius));
        set(styles, "filter", value.clone());
        set(styles, "-webkit-filter", value);
    }
}

fn line_height(line_height: LineHeight) -> String {
    match line_height.unit {
        LineHeightUnit::Auto => "normal".to_string(),
        LineHeightUnit::Percent if line_height.value > 0.0 => {
            css_number(line_height.value / 100.0)
        }
        _ => format!("{}px", css_number(line_height.value)),
    }
}

/// Quote families containing whitespace; embedded quotes are dropped.
fn font_family(family: &str) -> String {
    let family: String = family.chars().filter(|c| *c != '"').collect();
    if family.chars().any(char::is_whitespace) {
        format!("\"{family}\"")
    } else {
        family
    }
}

/// Lower-cased blend mode, or `None` for the normal mode.
fn blend_mode(mode: &str) -> Option<String> {
    let mode = mode.trim();
    if mode.is_empty() || mode.eq_ignore_ascii_case("NORMAL") {
        return None;
    }
    Some(mode.to_ascii_lowercase())
}
