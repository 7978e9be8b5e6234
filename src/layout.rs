//! Where to draw a [`Tree`][crate::rebuild::Tree]. This knows nothing about windows or graphics
//! libraries; it only turns the tree's structure (and optionally a search path through it) into a
//! list of circles and lines for a front-end to paint.
//!
//! The root sits centred near the top of the viewport. Each level is drawn [`LEVEL_SPACING`]
//! pixels below its parent and the horizontal distance between a parent and its children halves
//! at every level, starting from [`ROOT_OFFSET`]. An optional status caption goes in the
//! bottom-left corner.
//!
//! # Examples
//!
//! ```
//! use midpoint_bst::layout::{draw_commands, DrawCommand, Viewport};
//! use midpoint_bst::rebuild::Tree;
//!
//! let tree = Tree::from_keys(vec![1, 2, 3]);
//! let path = tree.search_path(&3);
//! let commands = draw_commands(tree.root(), path.nodes(), None, Viewport::default());
//!
//! // Two edges and three nodes.
//! assert_eq!(commands.len(), 5);
//!
//! // The root is painted last, on top of its edges.
//! match commands.last() {
//!     Some(DrawCommand::Node { key, center, highlighted, .. }) => {
//!         assert_eq!(**key, 2);
//!         assert_eq!(center.x, 800.0);
//!         assert!(*highlighted);
//!     }
//!     other => panic!("expected the root, got {:?}", other),
//! }
//! ```

use crate::rebuild::Node;

/// Radius of a node's circle.
pub const NODE_RADIUS: f32 = 30.0;
/// Distance from the top of the viewport to the root's centre.
pub const ROOT_Y: f32 = 50.0;
/// Horizontal distance between the root and each of its children.
pub const ROOT_OFFSET: f32 = 300.0;
/// Vertical distance between a node's centre and its children's centres.
pub const LEVEL_SPACING: f32 = 100.0;
/// Distance from the left edge of the viewport to the caption.
pub const CAPTION_LEFT: f32 = 10.0;
/// Distance from the bottom of the viewport to the top of the caption.
pub const CAPTION_BOTTOM: f32 = 50.0;

/// The area the tree is drawn into, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 1000.0,
        }
    }
}

/// A position in the viewport. `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

/// One thing to paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand<'a, K> {
    /// A line from a parent down to one of its children.
    Edge {
        /// Bottom of the parent's circle.
        from: Point,
        /// Top of the child's circle.
        to: Point,
        /// Whether the search path went down this edge.
        highlighted: bool,
    },
    /// A node's circle with its key written inside.
    Node {
        /// The key to write.
        key: &'a K,
        /// Centre of the circle.
        center: Point,
        /// Radius of the circle.
        radius: f32,
        /// Whether the search path visited this node.
        highlighted: bool,
    },
    /// A line of status text, such as `Inserting 42` or `Not Found 7`.
    Caption {
        /// The text to write.
        text: &'a str,
        /// Top-left corner of the text.
        at: Point,
    },
}

/// Lays out the tree rooted at `root`. Nodes in `path` (compared by identity, so pass nodes from
/// this same tree) and the edges between them are highlighted; pass an empty slice to highlight
/// nothing. A `caption` is placed [`CAPTION_BOTTOM`] pixels above the bottom of the viewport.
///
/// Commands come in painting order: a node's left edge and left subtree, then its right edge and
/// right subtree, then the node itself so it covers the ends of its edges. The caption comes last.
pub fn draw_commands<'a, K>(
    root: Option<&'a Node<K>>,
    path: &[&'a Node<K>],
    caption: Option<&'a str>,
    viewport: Viewport,
) -> Vec<DrawCommand<'a, K>> {
    let mut commands = Vec::new();
    if let Some(root) = root {
        let center = Point {
            x: viewport.width / 2.0,
            y: ROOT_Y,
        };
        lay_out(root, center, ROOT_OFFSET, path, &mut commands);
    }
    if let Some(text) = caption {
        commands.push(DrawCommand::Caption {
            text,
            at: Point {
                x: CAPTION_LEFT,
                y: viewport.height - CAPTION_BOTTOM,
            },
        });
    }
    commands
}

fn lay_out<'a, K>(
    node: &'a Node<K>,
    center: Point,
    offset: f32,
    path: &[&'a Node<K>],
    commands: &mut Vec<DrawCommand<'a, K>>,
) {
    let highlighted = on_path(node, path);

    for (child, dx) in [(node.left(), -offset), (node.right(), offset)] {
        if let Some(child) = child {
            let child_center = Point {
                x: center.x + dx,
                y: center.y + LEVEL_SPACING,
            };
            commands.push(DrawCommand::Edge {
                from: Point {
                    x: center.x,
                    y: center.y + NODE_RADIUS,
                },
                to: Point {
                    x: child_center.x,
                    y: child_center.y - NODE_RADIUS,
                },
                highlighted: highlighted && on_path(child, path),
            });
            lay_out(child, child_center, offset / 2.0, path, commands);
        }
    }

    commands.push(DrawCommand::Node {
        key: node.key(),
        center,
        radius: NODE_RADIUS,
        highlighted,
    });
}

fn on_path<K>(node: &Node<K>, path: &[&Node<K>]) -> bool {
    path.iter().any(|p| std::ptr::eq(*p, node))
}
