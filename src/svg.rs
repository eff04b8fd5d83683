//! SVG Document Model
//!
//! A small owned tree of tagged nodes with ordered attributes. Attribute
//! insertion order is kept because it is visible in the serialized output.

use std::fmt;

use base64::engine::general_purpose::STANDARD;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Element tags the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Rect,
    Circle,
    Path,
    Polyline,
    Group,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Rect => "rect",
            Tag::Circle => "circle",
            Tag::Path => "path",
            Tag::Polyline => "polyline",
            Tag::Group => "g",
        }
    }
}

/// Number formatted in shortest round-trip form, without exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            // covers -0
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Comma-joined coordinate list for `points` attributes.
pub fn points(coords: &[f64]) -> String {
    coords
        .iter()
        .map(|c| Num(*c).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Number(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => fmt::Display::fmt(&Num(*n), f),
            AttrValue::Text(s) => f.write_str(&xml_escape(s)),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(f64::from(value))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// One `transform` operation. Arguments serialize in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate(f64, f64),
    /// Angle in degrees about `(cx, cy)`.
    Rotate(f64, f64, f64),
    Scale(f64, f64),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Transform::Translate(x, y) => write!(f, "translate({},{})", Num(x), Num(y)),
            Transform::Rotate(a, cx, cy) => {
                write!(f, "rotate({},{},{})", Num(a), Num(cx), Num(cy))
            }
            Transform::Scale(x, y) => write!(f, "scale({},{})", Num(x), Num(y)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgNode {
    tag: Tag,
    attributes: Vec<(String, AttrValue)>,
    children: Vec<SvgNode>,
}

impl SvgNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn rect(
        x: impl Into<AttrValue>,
        y: impl Into<AttrValue>,
        width: impl Into<AttrValue>,
        height: impl Into<AttrValue>,
    ) -> Self {
        let mut node = Self::new(Tag::Rect);
        node.set_attribute("x", x)
            .set_attribute("y", y)
            .set_attribute("width", width)
            .set_attribute("height", height);
        node
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        let mut node = Self::new(Tag::Circle);
        node.set_attribute("cx", cx)
            .set_attribute("cy", cy)
            .set_attribute("r", r);
        node
    }

    pub fn path(d: impl Into<String>) -> Self {
        let mut node = Self::new(Tag::Path);
        node.set_attribute("d", AttrValue::Text(d.into()));
        node
    }

    pub fn polyline(points: impl Into<String>) -> Self {
        let mut node = Self::new(Tag::Polyline);
        node.set_attribute("points", AttrValue::Text(points.into()));
        node
    }

    pub fn group() -> Self {
        Self::new(Tag::Group)
    }

    /// Set `key`, overwriting an existing value in its original position.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    pub fn set_attributes(&mut self, attributes: &[(&str, AttrValue)]) -> &mut Self {
        for (key, value) in attributes {
            self.set_attribute(*key, value.clone());
        }
        self
    }

    pub fn add(&mut self, child: SvgNode) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn transform(&mut self, ops: &[Transform]) -> &mut Self {
        let value = ops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute("transform", value)
    }

    pub fn with_attributes(mut self, attributes: &[(&str, AttrValue)]) -> Self {
        self.set_attributes(attributes);
        self
    }

    pub fn with_transform(mut self, ops: &[Transform]) -> Self {
        self.transform(ops);
        self
    }

    pub fn with_child(mut self, child: SvgNode) -> Self {
        self.add(child);
        self
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn attributes(&self) -> &[(String, AttrValue)] {
        &self.attributes
    }

    pub fn children(&self) -> &[SvgNode] {
        &self.children
    }

}

impl fmt::Display for SvgNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag.as_str();
        write!(f, "<{tag}")?;
        for (key, value) in &self.attributes {
            write!(f, r#" {key}="{value}""#)?;
        }
        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{tag}>")
    }
}

/// Root `<svg>` container. Width and height are whole pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    nodes: Vec<SvgNode>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self {
            width: 100,
            height: 100,
            nodes: Vec::new(),
        }
    }

    /// Floors `width`; negative values clamp to 0.
    pub fn set_width(&mut self, width: f64) {
        self.width = width.floor() as u32;
    }

    /// Floors `height`; negative values clamp to 0.
    pub fn set_height(&mut self, height: f64) {
        self.height = height.floor() as u32;
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.set_width(width);
        self.set_height(height);
    }

    pub fn add(&mut self, node: SvgNode) {
        self.nodes.push(node);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn nodes(&self) -> &[SvgNode] {
        &self.nodes
    }

    pub fn to_data_uri(&self) -> String {
        let encoded = base64::Engine::encode(&STANDARD, self.to_string());
        format!("data:image/svg+xml;base64,{}", encoded)
    }

    pub fn to_data_url(&self) -> String {
        format!(r#"url("{}")"#, self.to_data_uri())
    }
}

impl Default for SvgDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg xmlns="{}" width="{}" height="{}">"#,
            SVG_NAMESPACE, self.width, self.height
        )?;
        for node in &self.nodes {
            write!(f, "{node}")?;
        }
        f.write_str("</svg>")
    }
}

/// Escape the five XML special characters for attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
