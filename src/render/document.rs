//! Serialization of the element tree into one self-contained HTML document.

use std::fmt::Write as _;

use crate::types::{ContainerSize, ProcessedElement};

use super::color::css_number;

const INDENT: &str = "        ";

/// Placeholder glyph for unresolved images: a framed landscape icon.
const PLACEHOLDER_ICON: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%23999999' stroke-width='1.5'><rect x='3' y='3' width='18' height='18' rx='2'/><circle cx='8.5' cy='8.5' r='1.5'/><path d='M21 15l-5-5L5 21'/></svg>";

pub(crate) fn render_document(root: &ProcessedElement, container: ContainerSize) -> String {
    let mut css = base_css(container);
    root.walk(&mut |element| {
        css.push('\n');
        css.push_str(&element_rule(element));
    });

    let mut body = String::new();
    write_element(&mut body, root);

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>Figma to HTML</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class=\"figma-container\">
        {body}
    </div>
</body>
</html>
"
    )
}

fn base_css(container: ContainerSize) -> String {
    let rules: [(&str, Vec<String>); 7] = [
        (
            "*",
            vec![
                "box-sizing: border-box".into(),
                "margin: 0".into(),
                "padding: 0".into(),
            ],
        ),
        (
            ".figma-container",
            vec![
                format!("width: {}px", css_number(container.width)),
                format!("height: {}px", css_number(container.height)),
                "position: relative".into(),
                "overflow: hidden".into(),
            ],
        ),
        (
            ".figma-text",
            vec!["white-space: pre-wrap".into(), "word-wrap: break-word".into()],
        ),
        (".figma-frame", vec!["overflow: hidden".into()]),
        (
            ".figma-image",
            vec![
                "object-fit: cover".into(),
                "object-position: center".into(),
                "max-width: 100%".into(),
                "max-height: 100%".into(),
            ],
        ),
        (
            ".figma-image > img",
            vec![
                "display: block".into(),
                "width: 100%".into(),
                "height: 100%".into(),
                "object-fit: cover".into(),
            ],
        ),
        (
            ".figma-image[data-placeholder=\"true\"]",
            vec![
                format!("background-image: url(\"{PLACEHOLDER_ICON}\")"),
                "background-repeat: no-repeat".into(),
                "background-position: center".into(),
                "background-size: 48px 48px".into(),
                "border: 1px dashed #ccc".into(),
                "box-sizing: border-box".into(),
            ],
        ),
    ];

    let mut css = String::new();
    for (i, (selector, declarations)) in rules.iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }
        let _ = writeln!(css, "{INDENT}{selector} {{");
        for declaration in declarations {
            let _ = writeln!(css, "{INDENT}    {declaration};");
        }
        let _ = write!(css, "{INDENT}}}");
    }
    css
}

/// `.{id} { k: v; ... }` with declarations in insertion order.
fn element_rule(element: &ProcessedElement) -> String {
    let mut rule = format!("{INDENT}.{} {{", element.id);
    for (key, value) in &element.styles {
        let _ = write!(rule, " {key}: {value};");
    }
    rule.push_str(" }");
    rule
}

fn write_element(out: &mut String, element: &ProcessedElement) {
    out.push_str("<div class=\"");
    out.push_str(&element.id);
    for class in &element.classes {
        out.push(' ');
        out.push_str(class);
    }
    out.push('"');
    write_attributes(out, &element.attributes);
    out.push('>');

    out.push('<');
    out.push_str(element.tag);
    write_attributes(out, &element.inner_attributes);
    out.push('>');

    if element.tag == "img" {
        // Void element: children follow it inside the wrapper.
        for child in &element.children {
            write_element(out, child);
        }
    } else {
        out.push_str(&escape_text(&element.content));
        for child in &element.children {
            write_element(out, child);
        }
        let _ = write!(out, "</{}>", element.tag);
    }

    out.push_str("</div>");
}

fn write_attributes<'a>(out: &mut String, attributes: impl IntoIterator<Item = (&'a String, &'a String)>) {
    for (key, value) in attributes {
        let _ = write!(out, " {key}=\"{}\"", escape_attribute(value));
    }
}

pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
