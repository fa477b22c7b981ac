//! Indented serialization of an element subtree, one node per line.

use scraper::{ElementRef, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];
/// Serialized verbatim on one line so their whitespace survives.
const PRESERVE_WHITESPACE: &[&str] = &["pre", "textarea"];
/// Text content is emitted without entity escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub fn prettify(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    write_element(element, 0, &mut out);
    out
}

fn write_element(element: ElementRef<'_>, depth: usize, out: &mut String) {
    let value = element.value();
    let name = value.name();

    push_indent(depth, out);
    out.push('<');
    out.push_str(name);
    for (attr, attr_value) in value.attrs() {
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        out.push_str(&escape(attr_value, true));
        out.push('"');
    }
    out.push_str(">\n");

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    if PRESERVE_WHITESPACE.contains(&name) {
        out.pop();
        out.push_str(&element.inner_html());
        out.push_str("</");
        out.push_str(name);
        out.push_str(">\n");
        return;
    }
    let raw_text = RAW_TEXT_ELEMENTS.contains(&name);

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            write_element(child_element, depth + 1, out);
            continue;
        }
        match child.value() {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    push_indent(depth + 1, out);
                    if raw_text {
                        out.push_str(text);
                    } else {
                        out.push_str(&escape(text, false));
                    }
                    out.push('\n');
                }
            }
            Node::Comment(comment) => {
                push_indent(depth + 1, out);
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->\n");
            }
            _ => {}
        }
    }

    push_indent(depth, out);
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

fn push_indent(depth: usize, out: &mut String) {
    out.extend(std::iter::repeat_n(' ', depth));
}

fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
