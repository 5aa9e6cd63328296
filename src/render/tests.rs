use super::*;
use crate::types::{
    Effect, EffectKind, FrameProps, ImageProps, LetterSpacing, LetterSpacingUnit, LineHeight,
    LineHeightUnit, Offset, Rgb, Rgba, SolidFill, StyleMap, TextAlignHorizontal,
    TextAlignVertical, TextAutoResize, TextCase, TextDecoration, TextProps,
};
use pretty_assertions::assert_eq;

fn node(id: &str, kind: NodeKind, bounds: Bounds) -> DesignNode {
    DesignNode {
        id: id.to_string(),
        name: String::new(),
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
        absolute_bounding_box: Some(bounds),
        rotation: None,
        opacity: None,
        visible: None,
        kind,
        children: Vec::new(),
    }
}

fn frame(id: &str, bounds: Bounds) -> DesignNode {
    node(id, NodeKind::Frame(FrameProps::default()), bounds)
}

fn generic(id: &str, bounds: Bounds) -> DesignNode {
    node(
        id,
        NodeKind::Generic {
            node_type: "RECTANGLE".to_string(),
        },
        bounds,
    )
}

fn text_props(characters: &str) -> TextProps {
    TextProps {
        characters: characters.to_string(),
        font_family: "Inter".to_string(),
        font_style: "Regular".to_string(),
        font_weight: 400.0,
        font_size: 16.0,
        line_height: LineHeight {
            value: 1.2,
            unit: LineHeightUnit::Auto,
        },
        letter_spacing: LetterSpacing {
            value: 0.0,
            unit: LetterSpacingUnit::Pixels,
        },
        fills: vec![SolidFill::default()],
        text_align_horizontal: TextAlignHorizontal::Left,
        text_align_vertical: TextAlignVertical::Top,
        text_decoration: TextDecoration::None,
        text_case: TextCase::Original,
        text_auto_resize: TextAutoResize::None,
        effects: Vec::new(),
    }
}

fn text(id: &str, props: TextProps, bounds: Bounds) -> DesignNode {
    node(id, NodeKind::Text(props), bounds)
}

fn image(id: &str, name: &str, url: &str) -> DesignNode {
    let mut n = node(
        id,
        NodeKind::Image(ImageProps {
            image_url: url.to_string(),
        }),
        Bounds::new(10.0, 10.0, 50.0, 50.0),
    );
    n.name = name.to_string();
    n
}

fn styles_of(node: &DesignNode) -> StyleMap {
    extract_styles(node, &ConversionOptions::default(), &mut FontRegistry::new())
}

fn container_200x100() -> Bounds {
    Bounds::new(0.0, 0.0, 200.0, 100.0)
}

#[test]
fn centered_text_is_anchored_at_its_midpoint() {
    let mut props = text_props("Hi");
    props.text_align_horizontal = TextAlignHorizontal::Center;
    props.text_align_vertical = TextAlignVertical::Center;
    let node = text("1:1", props, Bounds::new(50.0, 25.0, 100.0, 50.0));

    let pos = compute_position(&node, container_200x100(), &ConversionOptions::default());

    // x = [(50 - 0)/200 + (100/200)/2] * 100, y = [(25 - 0)/100 + (50/100)/2] * 100
    assert_eq!(pos.x, "50.0000%");
    assert_eq!(pos.y, "50.0000%");
    assert_eq!(pos.width, "50.0000%");
    assert_eq!(pos.height, "50.0000%");
    assert_eq!(pos.transform.as_deref(), Some("translate(-50%, -50%)"));
    assert_eq!(pos.transform_origin.as_deref(), Some("left top"));
}

#[test]
fn right_bottom_text_is_anchored_at_far_edges() {
    let mut props = text_props("Hi");
    props.text_align_horizontal = TextAlignHorizontal::Right;
    props.text_align_vertical = TextAlignVertical::Bottom;
    let node = text("1:1", props, Bounds::new(20.0, 10.0, 60.0, 30.0));

    let pos = compute_position(&node, container_200x100(), &ConversionOptions::default());

    assert_eq!(pos.x, "40.0000%");
    assert_eq!(pos.y, "40.0000%");
    assert_eq!(pos.transform.as_deref(), Some("translate(-100%, -100%)"));
}

#[test]
fn justified_text_uses_left_edge_without_translate() {
    let mut props = text_props("Hi");
    props.text_align_horizontal = TextAlignHorizontal::Justified;
    let node = text("1:1", props, Bounds::new(20.0, 10.0, 60.0, 30.0));

    let pos = compute_position(&node, container_200x100(), &ConversionOptions::default());

    assert_eq!(pos.x, "10.0000%");
    assert_eq!(pos.y, "10.0000%");
    assert_eq!(pos.transform, None);
    assert_eq!(pos.transform_origin, None);
}

#[test]
fn text_with_only_vertical_offset_keeps_zero_horizontal_term() {
    let mut props = text_props("Hi");
    props.text_align_vertical = TextAlignVertical::Center;
    let node = text("1:1", props, Bounds::new(0.0, 0.0, 10.0, 10.0));

    let pos = compute_position(&node, container_200x100(), &ConversionOptions::default());
    assert_eq!(pos.transform.as_deref(), Some("translate(0%, -50%)"));
}

#[test]
fn non_text_nodes_use_top_left_corner_relative_to_container_origin() {
    let node = generic("2:1", Bounds::new(150.0, 75.0, 50.0, 25.0));
    let container = Bounds::new(100.0, 50.0, 200.0, 100.0);

    let pos = compute_position(&node, container, &ConversionOptions::default());

    assert_eq!(pos.x, "25.0000%");
    assert_eq!(pos.y, "25.0000%");
    assert_eq!(pos.width, "25.0000%");
    assert_eq!(pos.height, "25.0000%");
    assert_eq!(pos.transform, None);
}

#[test]
fn fixed_mode_emits_scaled_pixels_at_configured_precision() {
    let node = generic("2:1", Bounds::new(0.0, 0.0, 33.333, 10.0));
    let options = ConversionOptions {
        enable_responsive: false,
        scale_factor: 2.0,
        precision: 2,
        ..Default::default()
    };

    let pos = compute_position(&node, container_200x100(), &options);

    assert_eq!(pos.width, "66.67px");
    assert_eq!(pos.height, "20.00px");
    assert_eq!(pos.x, "0.00%");
}

#[test]
fn rotation_is_inverted_with_two_decimals() {
    let mut node = generic("2:1", Bounds::new(0.0, 0.0, 10.0, 10.0));
    node.rotation = Some(90.0);
    let pos = compute_position(&node, container_200x100(), &ConversionOptions::default());
    assert_eq!(pos.transform.as_deref(), Some("rotate(-90.00deg)"));
    assert_eq!(pos.transform_origin.as_deref(), Some("left top"));

    node.rotation = Some(0.0);
    let pos = compute_position(&node, container_200x100(), &ConversionOptions::default());
    assert_eq!(pos.transform, None);

    node.rotation = None;
    let pos = compute_position(&node, container_200x100(), &ConversionOptions::default());
    assert_eq!(pos.transform, None);
    assert_eq!(pos.transform_origin, None);
}

#[test]
fn rotation_follows_alignment_translate() {
    let mut props = text_props("Hi");
    props.text_align_horizontal = TextAlignHorizontal::Center;
    let mut node = text("1:1", props, Bounds::new(0.0, 0.0, 10.0, 10.0));
    node.rotation = Some(-12.5);

    let pos = compute_position(&node, container_200x100(), &ConversionOptions::default());
    assert_eq!(
        pos.transform.as_deref(),
        Some("translate(-50%, 0%) rotate(12.50deg)")
    );
}

#[test]
fn line_height_units_map_independently() {
    let mut props = text_props("Hi");
    props.line_height = LineHeight {
        value: 150.0,
        unit: LineHeightUnit::Percent,
    };
    let styles = styles_of(&text("1", props, container_200x100()));
    assert_eq!(styles["line-height"], "1.5");

    let mut props = text_props("Hi");
    props.line_height = LineHeight {
        value: 24.0,
        unit: LineHeightUnit::Pixels,
    };
    let styles = styles_of(&text("1", props, container_200x100()));
    assert_eq!(styles["line-height"], "24px");

    let styles = styles_of(&text("1", text_props("Hi"), container_200x100()));
    assert_eq!(styles["line-height"], "normal");
}

#[test]
fn letter_spacing_percent_is_unitless_fraction() {
    let mut props = text_props("Hi");
    props.letter_spacing = LetterSpacing {
        value: 5.0,
        unit: LetterSpacingUnit::Percent,
    };
    let styles = styles_of(&text("1", props, container_200x100()));
    assert_eq!(styles["letter-spacing"], "0.05");

    let mut props = text_props("Hi");
    props.letter_spacing.value = 1.5;
    let styles = styles_of(&text("1", props, container_200x100()));
    assert_eq!(styles["letter-spacing"], "1.5px");
}

#[test]
fn text_keywords_are_lowercased_api_names() {
    let cases = [
        (TextDecoration::Underline, TextCase::Upper, TextAlignHorizontal::Center),
        (TextDecoration::Strikethrough, TextCase::Lower, TextAlignHorizontal::Right),
    ];
    let expected = [("underline", "upper", "center"), ("strikethrough", "lower", "right")];

    for ((decoration, case, align), (want_decoration, want_case, want_align)) in
        cases.into_iter().zip(expected)
    {
        let mut props = text_props("Hi");
        props.text_decoration = decoration;
        props.text_case = case;
        props.text_align_horizontal = align;
        let styles = styles_of(&text("1", props, container_200x100()));
        assert_eq!(styles["text-decoration"], want_decoration);
        assert_eq!(styles["text-transform"], want_case);
        assert_eq!(styles["text-align"], want_align);
    }
}

#[test]
fn text_styles_are_emitted_in_stable_order() {
    let mut props = text_props("Hello");
    props.font_family = "Open Sans".to_string();
    props.font_style = "Bold Italic".to_string();
    props.font_weight = 700.0;
    props.font_size = 24.0;
    props.fills = vec![SolidFill {
        color: Rgb {
            r: 1.0,
            g: 0.0,
            b: 0.0,
        },
        opacity: 0.5,
        blend_mode: "COLOR_DODGE".to_string(),
    }];
    props.text_decoration = TextDecoration::Strikethrough;
    props.text_case = TextCase::Title;
    props.text_align_horizontal = TextAlignHorizontal::Justified;
    props.text_auto_resize = TextAutoResize::WidthAndHeight;
    let mut node = text("1", props, container_200x100());
    node.opacity = Some(0.8);

    let styles = styles_of(&node);
    let pairs: Vec<(&str, &str)> = styles
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("position", "absolute"),
            ("opacity", "0.8"),
            ("margin-top", "0px"),
            ("margin-bottom", "0px"),
            ("font-family", "\"Open Sans\""),
            ("font-style", "italic"),
            ("font-weight", "700"),
            ("font-size", "24px"),
            ("line-height", "normal"),
            ("letter-spacing", "0px"),
            ("color", "rgba(255, 0, 0, 0.5)"),
            ("mix-blend-mode", "color_dodge"),
            ("text-decoration", "strikethrough"),
            ("text-transform", "title"),
            ("text-align", "justified"),
            ("white-space", "nowrap"),
        ]
    );
}

#[test]
fn default_text_omits_default_keywords_and_uses_rgb() {
    let styles = styles_of(&text("1", text_props("Hi"), container_200x100()));

    assert_eq!(styles["color"], "rgb(0, 0, 0)");
    assert_eq!(styles["font-family"], "Inter");
    assert_eq!(styles["font-style"], "normal");
    for key in [
        "opacity",
        "display",
        "mix-blend-mode",
        "text-decoration",
        "text-transform",
        "text-align",
        "white-space",
        "text-shadow",
        "filter",
    ] {
        assert!(!styles.contains_key(key), "unexpected {key}");
    }
}

#[test]
fn hidden_nodes_get_display_none() {
    let mut node = generic("1", container_200x100());
    node.visible = Some(false);
    node.opacity = Some(1.0);
    let styles = styles_of(&node);

    assert_eq!(styles["display"], "none");
    assert!(!styles.contains_key("opacity"));
}

#[test]
fn frame_fill_overrides_background_color() {
    let node = node(
        "1",
        NodeKind::Frame(FrameProps {
            background_color: Some(Rgb {
                r: 1.0,
                g: 1.0,
                b: 1.0,
            }),
            fills: vec![SolidFill {
                color: Rgb {
                    r: 0.0,
                    g: 0.0,
                    b: 1.0,
                },
                opacity: 0.4,
                blend_mode: "MULTIPLY".to_string(),
            }],
            corner_radius: Some(12.0),
        }),
        container_200x100(),
    );

    let styles = styles_of(&node);
    assert_eq!(styles["background-color"], "rgba(0, 0, 255, 0.4)");
    assert_eq!(styles["mix-blend-mode"], "multiply");
    assert_eq!(styles["border-radius"], "12px");
}

#[test]
fn frame_without_fill_uses_opaque_background_color() {
    let node = node(
        "1",
        NodeKind::Frame(FrameProps {
            background_color: Some(Rgb {
                r: 0.2,
                g: 0.4,
                b: 0.6,
            }),
            fills: Vec::new(),
            corner_radius: Some(0.0),
        }),
        container_200x100(),
    );

    let styles = styles_of(&node);
    assert_eq!(styles["background-color"], "rgb(51, 102, 153)");
    assert!(!styles.contains_key("border-radius"));
}

fn shadow(x: f64, y: f64, radius: f64, visible: bool) -> Effect {
    Effect {
        kind: EffectKind::DropShadow,
        visible,
        color: Some(Rgba {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.25,
        }),
        offset: Some(Offset { x, y }),
        radius,
    }
}

fn blur(radius: f64, visible: bool) -> Effect {
    Effect {
        kind: EffectKind::LayerBlur,
        visible,
        color: None,
        offset: None,
        radius,
    }
}

#[test]
fn text_effects_join_shadows_and_honor_first_visible_blur() {
    let mut props = text_props("Hi");
    props.effects = vec![
        shadow(0.0, 4.0, 4.0, true),
        blur(9.0, false),
        shadow(1.0, 1.0, 0.0, false),
        Effect {
            offset: None,
            ..shadow(2.0, 2.0, 2.0, true)
        },
        shadow(-2.0, 1.5, 3.0, true),
        blur(2.0, true),
        blur(6.0, true),
        Effect {
            kind: EffectKind::Other("INNER_SHADOW".to_string()),
            ..shadow(5.0, 5.0, 5.0, true)
        },
    ];
    let styles = styles_of(&text("1", props, container_200x100()));

    assert_eq!(
        styles["text-shadow"],
        "0px 4px 4px rgba(0, 0, 0, 0.25), -2px 1.5px 3px rgba(0, 0, 0, 0.25)"
    );
    assert_eq!(styles["filter"], "blur(2px)");
    assert_eq!(styles["-webkit-filter"], "blur(2px)");
}

#[test]
fn text_effects_are_skipped_when_disabled() {
    let mut props = text_props("Hi");
    props.effects = vec![shadow(0.0, 4.0, 4.0, true), blur(2.0, true)];
    let options = ConversionOptions {
        preserve_text_effects: false,
        ..Default::default()
    };

    let styles = extract_styles(
        &text("1", props, container_200x100()),
        &options,
        &mut FontRegistry::new(),
    );
    assert!(!styles.contains_key("text-shadow"));
    assert!(!styles.contains_key("filter"));
}

#[test]
fn font_registry_keeps_first_use_order_without_duplicates() {
    let mut root = frame("0", container_200x100());
    for (i, family) in ["Roboto", "Inter", "Roboto", "Open Sans"].iter().enumerate() {
        let mut props = text_props("x");
        props.font_family = family.to_string();
        root.children
            .push(text(&i.to_string(), props, Bounds::new(0.0, 0.0, 1.0, 1.0)));
    }

    let conversion = convert(&root, &ConversionOptions::default()).expect("convert");
    assert_eq!(conversion.used_fonts, vec!["Roboto", "Inter", "Open Sans"]);
}

#[test]
fn sanitized_ids_are_css_safe_and_unique() {
    let mut root = frame("0:1", container_200x100());
    for id in ["1:2", "1-2", "1;2", "1 2", "", ""] {
        root.children
            .push(generic(id, Bounds::new(0.0, 0.0, 10.0, 10.0)));
    }

    let tree = process_tree(&root, &ConversionOptions::default()).expect("process");
    let mut ids = Vec::new();
    tree.walk(&mut |el| ids.push(el.id.clone()));

    assert_eq!(
        ids,
        vec![
            "figma-0-1",
            "figma-1-2",
            "figma-1-2-2",
            "figma-1-2-3",
            "figma-1-2-4",
            "figma-6",
            "figma-7",
        ]
    );
    for id in &ids {
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}

#[test]
fn percentages_are_measured_against_root_not_parent() {
    let mut root = frame("root", Bounds::new(0.0, 0.0, 400.0, 200.0));
    let mut inner = frame("inner", Bounds::new(100.0, 100.0, 100.0, 50.0));
    inner
        .children
        .push(generic("leaf", Bounds::new(200.0, 150.0, 40.0, 20.0)));
    root.children.push(inner);

    let tree = process_tree(&root, &ConversionOptions::default()).expect("process");
    let leaf = &tree.children[0].children[0];

    assert_eq!(leaf.position.x, "50.0000%");
    assert_eq!(leaf.position.y, "75.0000%");
    assert_eq!(leaf.position.width, "10.0000%");
    assert_eq!(leaf.position.height, "10.0000%");
}

#[test]
fn position_declarations_follow_semantic_styles() {
    let mut root = frame("0", container_200x100());
    let mut props = text_props("Hi");
    props.text_align_horizontal = TextAlignHorizontal::Center;
    root.children
        .push(text("1", props, Bounds::new(50.0, 25.0, 100.0, 50.0)));

    let tree = process_tree(&root, &ConversionOptions::default()).expect("process");
    let keys: Vec<&str> = tree.children[0].styles.keys().map(String::as_str).collect();
    let tail = &keys[keys.len() - 6..];

    assert_eq!(
        tail,
        ["left", "top", "width", "height", "transform", "transform-origin"]
    );
    assert_eq!(tree.children[0].tag, "p");
    assert_eq!(tree.children[0].content, "Hi");
    assert_eq!(tree.children[0].classes, vec!["figma-text"]);
    assert_eq!(tree.tag, "div");
    assert_eq!(tree.classes, vec!["figma-frame"]);
}

#[test]
fn placeholder_and_src_are_mutually_exclusive() {
    let mut root = frame("0", container_200x100());
    root.children.push(image("1", "Hero", ""));
    root.children
        .push(image("2", "", "https://cdn.example.com/a.png?x=1&y=2"));

    let conversion = convert(&root, &ConversionOptions::default()).expect("convert");
    let html = &conversion.html;

    assert!(html.contains(
        r#"<div class="figma-1 figma-image" data-placeholder="true"><img alt="Hero (placeholder)"></div>"#
    ));
    assert!(html.contains(
        r#"<div class="figma-2 figma-image"><img src="https://cdn.example.com/a.png?x=1&amp;y=2" alt="Image"></div>"#
    ));
    assert_eq!(html.matches("data-placeholder=\"true\">").count(), 1);
    assert_eq!(conversion.image_count, 2);
    assert_eq!(conversion.placeholder_count, 1);

    let tree = process_tree(&root, &ConversionOptions::default()).expect("process");
    let placeholder = &tree.children[0];
    assert!(placeholder.attributes.contains_key("data-placeholder"));
    assert!(!placeholder.inner_attributes.contains_key("src"));
    let resolved = &tree.children[1];
    assert!(!resolved.attributes.contains_key("data-placeholder"));
    assert!(resolved.inner_attributes.contains_key("src"));
}

#[test]
fn image_children_follow_the_void_img_tag() {
    let mut root = frame("0", container_200x100());
    let mut img = image("1", "photo", "");
    img.children.push(text(
        "2",
        text_props("Caption"),
        Bounds::new(10.0, 10.0, 20.0, 10.0),
    ));
    root.children.push(img);

    let html = convert_to_html(&root, &ConversionOptions::default()).expect("convert");
    assert!(html.contains(
        r#"<img alt="photo (placeholder)"><div class="figma-2 figma-text"><p>Caption</p></div></div>"#
    ));
}

#[test]
fn body_markup_nests_semantic_tags_inside_wrappers() {
    let mut root = frame("0:1", container_200x100());
    root.children
        .push(generic("1:2", Bounds::new(0.0, 0.0, 20.0, 10.0)));
    root.children.push(text(
        "1:3",
        text_props("a < b & \"c\""),
        Bounds::new(0.0, 0.0, 20.0, 10.0),
    ));

    let html = convert_to_html(&root, &ConversionOptions::default()).expect("convert");
    let body_line = html
        .lines()
        .find(|line| line.trim_start().starts_with("<div class=\"figma-0-1"))
        .expect("body markup line");

    assert_eq!(
        body_line.trim(),
        concat!(
            r#"<div class="figma-0-1 figma-frame"><div>"#,
            r#"<div class="figma-1-2 figma-rectangle"><div></div></div>"#,
            r#"<div class="figma-1-3 figma-text"><p>a &lt; b &amp; "c"</p></div>"#,
            r#"</div></div>"#
        )
    );
}

#[test]
fn document_has_base_rules_and_one_rule_per_element() {
    let mut root = frame("0:1", container_200x100());
    root.children
        .push(generic("1:2", Bounds::new(20.0, 10.0, 20.0, 10.0)));

    let html = convert_to_html(&root, &ConversionOptions::default()).expect("convert");

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert_eq!(html.matches("<style>").count(), 1);
    assert!(html.contains(".figma-container {\n            width: 200px;\n            height: 100px;"));
    assert!(html.contains("overflow: hidden;"));
    assert!(html.contains("background-size: 48px 48px;"));
    assert!(html.contains("border: 1px dashed #ccc;"));
    assert!(html.contains(
        ".figma-1-2 { position: absolute; left: 10.0000%; top: 10.0000%; width: 10.0000%; height: 10.0000%; }"
    ));
    assert!(html.contains("<div class=\"figma-container\">"));
}

#[test]
fn container_size_defaults_to_root_and_applies_scale() {
    let root = frame("0", container_200x100());
    let options = ConversionOptions {
        scale_factor: 1.5,
        ..Default::default()
    };
    let conversion = convert(&root, &options).expect("convert");
    assert_eq!(
        conversion.container,
        ContainerSize {
            width: 300.0,
            height: 150.0
        }
    );

    let options = ConversionOptions {
        container_width: Some(1440.0),
        container_height: Some(900.0),
        ..Default::default()
    };
    let conversion = convert(&root, &options).expect("convert");
    assert!(conversion.html.contains("width: 1440px;"));
    assert!(conversion.html.contains("height: 900px;"));
}

#[test]
fn zero_extent_root_is_a_config_error() {
    let root = frame("0", Bounds::new(0.0, 0.0, 0.0, 100.0));
    let err = convert(&root, &ConversionOptions::default()).unwrap_err();
    assert!(matches!(err, F2hError::Config(_)), "got {err:?}");

    let root = frame("0", Bounds::new(0.0, 0.0, 100.0, f64::NAN));
    assert!(matches!(
        convert(&root, &ConversionOptions::default()),
        Err(F2hError::Config(_))
    ));
}

#[test]
fn invalid_options_are_config_errors() {
    let root = frame("0", container_200x100());
    let options = ConversionOptions {
        scale_factor: 0.0,
        ..Default::default()
    };
    assert!(matches!(convert(&root, &options), Err(F2hError::Config(_))));

    let options = ConversionOptions {
        container_height: Some(0.0),
        ..Default::default()
    };
    assert!(matches!(convert(&root, &options), Err(F2hError::Config(_))));
}

#[test]
fn process_tree_rejects_invalid_options() {
    let root = frame("0", container_200x100());
    let options = ConversionOptions {
        scale_factor: -1.0,
        ..Default::default()
    };
    assert!(matches!(process_tree(&root, &options), Err(F2hError::Config(_))));

    let options = ConversionOptions {
        precision: 11,
        ..Default::default()
    };
    assert!(matches!(process_tree(&root, &options), Err(F2hError::Config(_))));
}

#[test]
fn overly_deep_trees_fail_fast() {
    let mut leaf = generic("leaf", Bounds::new(0.0, 0.0, 1.0, 1.0));
    for depth in 0..5 {
        let mut parent = frame(&format!("d{depth}"), container_200x100());
        parent.children.push(leaf);
        leaf = parent;
    }
    let options = ConversionOptions {
        max_depth: 3,
        ..Default::default()
    };

    let err = convert(&leaf, &options).unwrap_err();
    assert!(matches!(err, F2hError::Render(_)), "got {err:?}");
    assert!(convert(&leaf, &ConversionOptions::default()).is_ok());
}

#[test]
fn conversion_is_deterministic() {
    let mut root = frame("0:1", container_200x100());
    let mut props = text_props("Hello");
    props.font_family = "Open Sans".to_string();
    props.effects = vec![shadow(1.0, 1.0, 2.0, true), blur(3.0, true)];
    let mut title = text("1:1", props, Bounds::new(10.0, 10.0, 100.0, 20.0));
    title.rotation = Some(15.0);
    root.children.push(title);
    root.children.push(image("1:2", "avatar image", ""));
    root.children
        .push(generic("1:3", Bounds::new(5.0, 5.0, 5.0, 5.0)));

    let first = convert(&root, &ConversionOptions::default()).expect("first");
    let second = convert(&root, &ConversionOptions::default()).expect("second");

    assert_eq!(first.html, second.html);
    assert_eq!(first.element_count, 4);
}
