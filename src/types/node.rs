//! Typed domain nodes produced by the classifier.
//!
//! A [`DesignNode`] carries the fields every node shares plus a closed
//! [`NodeKind`] union, so renderer code matches exhaustively on the variant.

use serde::{Deserialize, Serialize};

use super::core::Bounds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    /// Designer-given label; consulted by heuristics, never rendered.
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub absolute_bounding_box: Option<Bounds>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
    pub kind: NodeKind,
    pub children: Vec<DesignNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Text(TextProps),
    Frame(FrameProps),
    Image(ImageProps),
    /// Any other node type; the raw Figma type string is kept for class naming.
    Generic { node_type: String },
}

impl DesignNode {
    /// Authoritative bounds: the absolute bounding box when present, else local geometry.
    pub fn bounds(&self) -> Bounds {
        self.absolute_bounding_box
            .unwrap_or_else(|| Bounds::new(self.x, self.y, self.width, self.height))
    }

    /// Figma type name of the node (`TEXT`, `FRAME`, `IMAGE`, or the raw type).
    pub fn type_name(&self) -> &str {
        match &self.kind {
            NodeKind::Text(_) => "TEXT",
            NodeKind::Frame(_) => "FRAME",
            NodeKind::Image(_) => "IMAGE",
            NodeKind::Generic { node_type } => node_type,
        }
    }

    pub fn as_text(&self) -> Option<&TextProps> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(DesignNode::subtree_len).sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub characters: String,
    pub font_family: String,
    pub font_style: String,
    pub font_weight: f64,
    pub font_size: f64,
    pub line_height: LineHeight,
    pub letter_spacing: LetterSpacing,
    pub fills: Vec<SolidFill>,
    pub text_align_horizontal: TextAlignHorizontal,
    pub text_align_vertical: TextAlignVertical,
    pub text_decoration: TextDecoration,
    pub text_case: TextCase,
    pub text_auto_resize: TextAutoResize,
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameProps {
    pub background_color: Option<Rgb>,
    pub fills: Vec<SolidFill>,
    pub corner_radius: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    /// Resolved bitmap URL; empty when none was exported.
    pub image_url: String,
}

/// Color channels in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidFill {
    pub color: Rgb,
    pub opacity: f64,
    pub blend_mode: String,
}

impl Default for SolidFill {
    fn default() -> Self {
        Self {
            color: Rgb::default(),
            opacity: 1.0,
            blend_mode: "NORMAL".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineHeight {
    pub value: f64,
    pub unit: LineHeightUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeightUnit {
    Auto,
    Pixels,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LetterSpacing {
    pub value: f64,
    pub unit: LetterSpacingUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LetterSpacingUnit {
    Pixels,
    Percent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAutoResize {
    #[default]
    None,
    WidthAndHeight,
    Height,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    pub kind: EffectKind,
    pub visible: bool,
    pub color: Option<Rgba>,
    pub offset: Option<Offset>,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    LayerBlur,
    /// Inner shadows, background blurs and future effect types; not rendered.
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

macro_rules! keyword_parser {
    ($ty:ty { $($keyword:literal => $variant:expr),+ $(,)? }) => {
        impl $ty {
            /// Case-insensitive mapping from the API keyword; unknown input yields the default.
            pub fn from_keyword(value: &str) -> Self {
                match value.trim().to_ascii_uppercase().as_str() {
                    $($keyword => $variant,)+
                    _ => Self::default(),
                }
            }
        }
    };
}

keyword_parser!(TextAlignHorizontal {
    "LEFT" => TextAlignHorizontal::Left,
    "CENTER" => TextAlignHorizontal::Center,
    "RIGHT" => TextAlignHorizontal::Right,
    "JUSTIFIED" => TextAlignHorizontal::Justified,
});

keyword_parser!(TextAlignVertical {
    "TOP" => TextAlignVertical::Top,
    "CENTER" => TextAlignVertical::Center,
    "BOTTOM" => TextAlignVertical::Bottom,
});

keyword_parser!(TextDecoration {
    "UNDERLINE" => TextDecoration::Underline,
    "STRIKETHROUGH" => TextDecoration::Strikethrough,
});

keyword_parser!(TextCase {
    "UPPER" => TextCase::Upper,
    "LOWER" => TextCase::Lower,
    "TITLE" => TextCase::Title,
});

keyword_parser!(TextAutoResize {
    "WIDTH_AND_HEIGHT" => TextAutoResize::WidthAndHeight,
    "HEIGHT" => TextAutoResize::Height,
});

impl EffectKind {
    pub fn from_keyword(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "DROP_SHADOW" => EffectKind::DropShadow,
            "LAYER_BLUR" => EffectKind::LayerBlur,
            other => EffectKind::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic(id: &str, bbox: Option<Bounds>) -> DesignNode {
        DesignNode {
            id: id.to_string(),
            name: String::new(),
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
            absolute_bounding_box: bbox,
            rotation: None,
            opacity: None,
            visible: None,
            kind: NodeKind::Generic {
                node_type: "GROUP".to_string(),
            },
            children: Vec::new(),
        }
    }

    #[test]
    fn bounds_prefers_absolute_bounding_box() {
        let node = generic("1", Some(Bounds::new(10.0, 20.0, 30.0, 40.0)));
        assert_eq!(node.bounds(), Bounds::new(10.0, 20.0, 30.0, 40.0));

        let local = generic("2", None);
        assert_eq!(local.bounds(), Bounds::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn keywords_map_case_insensitively_with_neutral_fallback() {
        assert_eq!(
            TextAlignHorizontal::from_keyword("center"),
            TextAlignHorizontal::Center
        );
        assert_eq!(
            TextAlignHorizontal::from_keyword("sideways"),
            TextAlignHorizontal::Left
        );
        assert_eq!(
            TextAlignVertical::from_keyword("Bottom"),
            TextAlignVertical::Bottom
        );
        assert_eq!(TextDecoration::from_keyword(""), TextDecoration::None);
        assert_eq!(TextCase::from_keyword("title"), TextCase::Title);
        assert_eq!(TextCase::from_keyword("SMALL_CAPS"), TextCase::Original);
        assert_eq!(
            TextAutoResize::from_keyword("width_and_height"),
            TextAutoResize::WidthAndHeight
        );
        assert_eq!(
            EffectKind::from_keyword("INNER_SHADOW"),
            EffectKind::Other("INNER_SHADOW".to_string())
        );
    }

    #[test]
    fn type_name_and_subtree_len() {
        let mut root = generic("1", None);
        root.children.push(generic("2", None));
        root.children[0].children.push(generic("3", None));
        assert_eq!(root.type_name(), "GROUP");
        assert_eq!(root.subtree_len(), 3);
    }
}
