//! Article content tree to HTML
//!
//! Depth-first walk over the [`Node`] tree. Each node is dispatched in two
//! stages:
//!
//! 1. If its [`Identifier`] is `FIGURE`, `TITLE` or `CENTER`, the children are
//!    wrapped in `<div class="figure|title|center">` and the kind is ignored.
//! 2. Otherwise the [`NodeKind`] selects the markup.
//!
//! Children are rendered in order, each followed by a newline. Values are
//! emitted verbatim: nothing is escaped, and `html` nodes are never passed
//! through (they take the unsupported path).
//!
//! Rendering cannot fail. Out-of-range heading levels are clamped to 1 and
//! unknown kinds render a visible marker followed by their children; both
//! emit a `tracing` warning.
//!
//! # Example
//!
//! ```
//! use republik_rs::{Node, NodeKind};
//!
//! let list = Node::list(true, vec![
//!     Node::new(NodeKind::ListItem).with_children(vec![Node::text("a")]),
//! ]);
//! assert_eq!(list.to_html(), "<ol> <li> a\n </li>\n </ol>");
//! ```

use std::fmt::Write;

use tracing::warn;

use crate::article::{Article, ArticleResponse, Content};
use crate::node::{Identifier, Node, NodeKind};

/// Placeholder returned when an article cannot be fetched
pub const FETCH_FAILED_HTML: &str = "<p>Fetching article failed </p>";

/// Render a whole article response
///
/// The content tree is wrapped in `<div class="article">`.
pub fn render(response: &ArticleResponse) -> String {
    response.to_html()
}

impl ArticleResponse {
    /// Render the article inside `<div class="article">`
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(r#"<div class="article"> "#);
        render_nodes(&self.article.content.children, &mut out);
        out.push_str(" </div>");
        out
    }
}

impl Article {
    /// Render the content tree without the outer container
    pub fn to_html(&self) -> String {
        self.content.to_html()
    }
}

impl Content {
    /// Render every top-level node, each followed by a newline
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        render_nodes(&self.children, &mut out);
        out
    }
}

impl Node {
    /// Render this node and its subtree
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        render_node(self, &mut out);
        out
    }

    /// Render the children of this node, each followed by a newline
    pub fn render_children(&self) -> String {
        let mut out = String::new();
        render_nodes(&self.children, &mut out);
        out
    }
}

fn render_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        render_node(node, out);
        out.push('\n');
    }
}

fn render_node(node: &Node, out: &mut String) {
    if let Some(class) = node.identifier.as_ref().and_then(Identifier::override_class) {
        let _ = write!(out, r#"<div class="{}"> "#, class);
        render_nodes(&node.children, out);
        out.push_str(" </div>");
        return;
    }

    render_kind(node, out);
}

fn render_kind(node: &Node, out: &mut String) {
    match &node.kind {
        NodeKind::Blockquote => wrap(node, "<blockquote> ", " </blockquote>", out),
        NodeKind::Break => out.push_str("<br>"),
        NodeKind::Code => wrap(node, "<pre><code> ", " </code></pre>", out),
        NodeKind::Emphasis => wrap(node, "<em> ", " </em>", out),
        NodeKind::Heading => {
            let level = heading_level(node.depth);
            let _ = write!(out, "<h{}> ", level);
            render_nodes(&node.children, out);
            let _ = write!(out, " </h{}>", level);
        }
        NodeKind::Image => {
            let _ = write!(
                out,
                r#"<img title="{}" alt="{}" src="{}" />"#,
                node.title, node.alt, node.url
            );
        }
        NodeKind::InlineCode => wrap(node, "<code> ", " </code>", out),
        // TODO: rewrite site-relative links ("/2024/...") against the public host
        NodeKind::Link => {
            let _ = write!(out, r#"<a href="{}"> "#, node.url);
            render_nodes(&node.children, out);
            out.push_str(" </a>");
        }
        NodeKind::List if node.ordered => wrap(node, "<ol> ", " </ol>", out),
        NodeKind::List => wrap(node, "<ul> ", " </ul>", out),
        NodeKind::ListItem => wrap(node, "<li> ", " </li>", out),
        NodeKind::Paragraph => wrap(node, "<p> ", " </p>", out),
        NodeKind::Strong => wrap(node, "<strong> ", " </strong>", out),
        NodeKind::Sub => wrap(node, "<sub> ", " </sub>", out),
        NodeKind::Sup => wrap(node, "<sup> ", " </sup>", out),
        NodeKind::Span => wrap(node, "<span> ", " </span>", out),
        NodeKind::Text => out.push_str(&node.value),
        NodeKind::Zone => {
            let class = node.identifier.as_ref().map_or("", Identifier::as_str);
            let _ = write!(out, r#"<div class="{}">"#, class);
            render_nodes(&node.children, out);
            out.push_str("</div>");
        }
        // a divider still renders its children
        NodeKind::ThematicBreak => wrap(node, "<hr/> ", "", out),
        NodeKind::Unsupported(name) => {
            warn!(kind = %name, "Unsupported element: {}", name);
            let _ = write!(
                out,
                r#"<div class="error">Unsupported element: {} </div> "#,
                name
            );
            render_nodes(&node.children, out);
        }
    }
}

fn wrap(node: &Node, open: &str, close: &str, out: &mut String) {
    out.push_str(open);
    render_nodes(&node.children, out);
    out.push_str(close);
}

/// Heading level in 1..=6, anything else becomes 1
fn heading_level(depth: i64) -> i64 {
    if (1..=6).contains(&depth) {
        depth
    } else {
        warn!(depth, "Heading depth not in range, rendering as h1");
        1
    }
}
