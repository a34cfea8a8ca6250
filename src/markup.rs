//! Typed render tree.
//!
//! Views build [`Node`] trees; nothing is concatenated as raw HTML. Text children
//! and attribute values are escaped when the tree is rendered, and link/media
//! attributes only accept URLs that pass [`safe_url`].

use std::fmt::Write as _;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "meta", "link"];
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

/// Start an element.
pub fn el(tag: &'static str) -> Element {
    Element { tag, attrs: Vec::new(), children: Vec::new() }
}

pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment(nodes.into_iter().collect())
}

pub fn empty() -> Node {
    Node::Fragment(Vec::new())
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: &str) -> Self {
        self.attr("id", value)
    }

    /// Set `href`, dropping the attribute when the URL is not safe to emit.
    pub fn href(self, url: &str) -> Self {
        self.url_attr("href", url)
    }

    /// Set `src`, dropping the attribute when the URL is not safe to emit.
    pub fn src(self, url: &str) -> Self {
        self.url_attr("src", url)
    }

    fn url_attr(self, name: &'static str, url: &str) -> Self {
        match safe_url(url) {
            Some(u) => self.attr(name, u),
            None => self,
        }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::Text(s.into()))
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl Node {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Node::Text(s) => {
                html_escape::encode_text_to_string(s, out);
            }
            Node::Fragment(nodes) => nodes.iter().for_each(|n| n.write_to(out)),
            Node::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                for (name, value) in &e.attrs {
                    let _ = write!(out, " {}=\"", name);
                    html_escape::encode_double_quoted_attribute_to_string(value, out);
                    out.push('"');
                }
                if VOID_TAGS.contains(&e.tag) {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                e.children.iter().for_each(|n| n.write_to(out));
                let _ = write!(out, "</{}>", e.tag);
            }
        }
    }
}

/// Accept hash routes, origin-relative paths and absolute http(s)/mailto URLs.
/// Anything with another scheme (`javascript:`, `data:`...) is rejected.
pub fn safe_url(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() || s.starts_with("//") {
        return None;
    }
    if s.starts_with('#') || s.starts_with('/') {
        return Some(s.to_string());
    }
    match Url::parse(s) {
        Ok(url) if SAFE_SCHEMES.contains(&url.scheme()) => Some(url.into()),
        Ok(_) => None,
        // No scheme at all: a relative path like `data/schedule.ics`.
        Err(url::ParseError::RelativeUrlWithoutBase) if !s.contains(':') => Some(s.to_string()),
        Err(_) => None,
    }
}

/// Everything except RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode a single path segment or query value.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Inverse of [`encode_component`]. A literal `+` stays a plus sign.
pub fn decode_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}
