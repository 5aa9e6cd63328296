pub mod core;
pub mod element;
pub mod node;

pub use self::core::{Bounds, ContainerSize, InputKind};
pub use element::{ElementPosition, ProcessedElement, StyleMap};
pub use node::{
    DesignNode, Effect, EffectKind, FrameProps, ImageProps, LetterSpacing, LetterSpacingUnit,
    LineHeight, LineHeightUnit, NodeKind, Offset, Rgb, Rgba, SolidFill, TextAlignHorizontal,
    TextAlignVertical, TextAutoResize, TextCase, TextDecoration, TextProps,
};
