//! mdast-derived content tree
//!
//! The Republik API ships article bodies as a tree of nodes loosely based on
//! [mdast](https://github.com/syntax-tree/mdast), extended with `sub`, `sup`,
//! `span` and `zone` and without some of the reference kinds.
//!
//! Every field is optional on the wire. Missing and `null` values collapse to
//! their defaults so that a node's children are always iterable.

use serde::{Deserialize, Deserializer, Serialize};

/// Structural role of a [`Node`]
///
/// Parsed from the JSON `type` string. Names the renderer has no rule for
/// are kept verbatim in [`NodeKind::Unsupported`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    /// `blockquote`
    Blockquote,
    /// `break` (hard line break)
    Break,
    /// `code` (fenced or indented block)
    Code,
    /// `emphasis`
    Emphasis,
    /// `heading`, level in [`Node::depth`]
    Heading,
    /// `image`
    Image,
    /// `inlineCode`
    InlineCode,
    /// `link`
    Link,
    /// `list`, numbering in [`Node::ordered`]
    List,
    /// `listItem`
    ListItem,
    /// `paragraph`
    Paragraph,
    /// `strong`
    Strong,
    /// `sub` (subscript)
    Sub,
    /// `sup` (superscript)
    Sup,
    /// `span`
    Span,
    /// `text`
    Text,
    /// `zone` (Republik layout container)
    Zone,
    /// `thematicBreak`
    ThematicBreak,
    /// Any other type name, including `html`
    Unsupported(String),
}

impl NodeKind {
    /// Wire name of this kind
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Blockquote => "blockquote",
            NodeKind::Break => "break",
            NodeKind::Code => "code",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Heading => "heading",
            NodeKind::Image => "image",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Link => "link",
            NodeKind::List => "list",
            NodeKind::ListItem => "listItem",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Strong => "strong",
            NodeKind::Sub => "sub",
            NodeKind::Sup => "sup",
            NodeKind::Span => "span",
            NodeKind::Text => "text",
            NodeKind::Zone => "zone",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Unsupported(name) => name,
        }
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Unsupported(String::new())
    }
}

impl From<&str> for NodeKind {
    fn from(name: &str) -> Self {
        match name {
            "blockquote" => NodeKind::Blockquote,
            "break" => NodeKind::Break,
            "code" => NodeKind::Code,
            "emphasis" => NodeKind::Emphasis,
            "heading" => NodeKind::Heading,
            "image" => NodeKind::Image,
            // older documents spell it in lowercase
            "inlineCode" | "inlinecode" => NodeKind::InlineCode,
            "link" => NodeKind::Link,
            "list" => NodeKind::List,
            "listItem" => NodeKind::ListItem,
            "paragraph" => NodeKind::Paragraph,
            "strong" => NodeKind::Strong,
            "sub" => NodeKind::Sub,
            "sup" => NodeKind::Sup,
            "span" => NodeKind::Span,
            "text" => NodeKind::Text,
            "zone" => NodeKind::Zone,
            "thematicBreak" => NodeKind::ThematicBreak,
            other => NodeKind::Unsupported(other.to_string()),
        }
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        match NodeKind::from(name.as_str()) {
            NodeKind::Unsupported(_) => NodeKind::Unsupported(name),
            kind => kind,
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Unsupported(name) => name,
            kind => kind.as_str().to_string(),
        }
    }
}

/// Secondary tag on a [`Node`]
///
/// `FIGURE`, `TITLE` and `CENTER` override kind-based rendering. Any other
/// value is kept in [`Identifier::Other`]; zones use it as their class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Identifier {
    /// `FIGURE`
    Figure,
    /// `TITLE`
    Title,
    /// `CENTER`
    Center,
    /// Any other identifier string
    Other(String),
}

impl Identifier {
    /// Wire string of this identifier
    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Figure => "FIGURE",
            Identifier::Title => "TITLE",
            Identifier::Center => "CENTER",
            Identifier::Other(value) => value,
        }
    }

    /// Container class for identifiers that override kind-based rendering
    pub fn override_class(&self) -> Option<&'static str> {
        match self {
            Identifier::Figure => Some("figure"),
            Identifier::Title => Some("title"),
            Identifier::Center => Some("center"),
            Identifier::Other(_) => None,
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        match value {
            "FIGURE" => Identifier::Figure,
            "TITLE" => Identifier::Title,
            "CENTER" => Identifier::Center,
            other => Identifier::Other(other.to_string()),
        }
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        match Identifier::from(value.as_str()) {
            Identifier::Other(_) => Identifier::Other(value),
            identifier => identifier,
        }
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        match identifier {
            Identifier::Other(value) => value,
            identifier => identifier.as_str().to_string(),
        }
    }
}

/// One element of the article content tree
///
/// Scalar fields only carry meaning for some kinds: `depth` for headings,
/// `value` for text, `url`/`title`/`alt` for links and images, `ordered` for
/// lists. They default to zero/empty everywhere else.
///
/// # Example
///
/// ```
/// use republik_rs::{Node, NodeKind};
///
/// let node: Node = serde_json::from_str(
///     r#"{"type":"paragraph","children":[{"type":"text","value":"Hallo"}]}"#,
/// ).unwrap();
/// assert_eq!(node.kind, NodeKind::Paragraph);
/// assert_eq!(node.children[0].value, "Hallo");
///
/// let leaf: Node = serde_json::from_str(r#"{"type":"break","children":null}"#).unwrap();
/// assert!(leaf.children.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Structural role (`type` on the wire)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: NodeKind,

    /// Override tag; empty strings deserialize to `None`
    #[serde(
        default,
        deserialize_with = "identifier_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub identifier: Option<Identifier>,

    /// Child nodes, empty for leaves
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Node>,

    /// Heading level, expected 1-6
    #[serde(default, deserialize_with = "null_as_default")]
    pub depth: i64,

    /// Literal text of text leaves
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,

    /// Image alt text
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt: String,

    /// Image or link title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Image source or link target
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Code block source
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,

    /// Code block language
    #[serde(default, deserialize_with = "null_as_default")]
    pub lang: String,

    /// Reference label
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,

    /// List numbering style
    #[serde(default, deserialize_with = "null_as_default")]
    pub ordered: bool,
}

impl Node {
    /// Create an empty node of the given kind
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Create a text leaf
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            value: value.into(),
            ..Default::default()
        }
    }

    /// Create a heading with the given level and children
    pub fn heading(depth: i64, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Heading)
            .with_depth(depth)
            .with_children(children)
    }

    /// Create a list of items
    pub fn list(ordered: bool, items: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::List,
            ordered,
            children: items,
            ..Default::default()
        }
    }

    /// Create a link around the given children
    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Link)
            .with_url(url)
            .with_children(children)
    }

    /// Create an image
    pub fn image(
        url: impl Into<String>,
        alt: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            kind: NodeKind::Image,
            url: url.into(),
            alt: alt.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the child nodes
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Set the identifier tag
    pub fn with_identifier(mut self, identifier: impl Into<Identifier>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the heading level
    pub fn with_depth(mut self, depth: i64) -> Self {
        self.depth = depth;
        self
    }

    /// Set the image source or link target
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set literal text
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Deserialize `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn identifier_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<Identifier>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(Identifier::from))
}
