//! This crate exposes two small demonstrations of binary-search-style lookup
//! over sorted data, mostly for educational purposes.
//!
//! ## The midpoint rule
//!
//! Both demonstrations split an inclusive index range `[lo, hi]` at the same
//! place: the "upper middle" index `(lo + hi + 1) / 2` (see [`midpoint`]). When
//! the range has an even number of elements the higher of the two middle
//! elements is chosen. Using one rule everywhere means the tree built over a
//! sorted list makes exactly the decisions a flat binary search over that list
//! would make.
//!
//! ## Flat binary search
//!
//! [`flat::search`] is an iterative binary search over a sorted slice that
//! records every index it probes, so a failed (or successful) search can be
//! explained afterwards.
//!
//! ## The "special AVL" tree
//!
//! [`rebuild::Tree`] is a Binary Search Tree whose most important invariants
//! are the usual ones:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! It is also always height-balanced: the heights of the two subtrees of any
//! `Node` differ by at most one. Unlike a classic AVL tree it does not get
//! there with rotations. The tree keeps its keys in a sorted list and, after
//! every insert or delete, throws the old nodes away and builds a fresh tree
//! by recursively picking the midpoint of the list as the root. That makes
//! each mutation `O(N)` instead of `O(lg N)`, but perfect balance after every
//! mutation is trivial to see.
//!
//! [`layout`] turns a tree (and optionally a search path through it) into
//! toolkit-independent draw commands for anyone who wants to picture it, and
//! [`command`] parses the requests the `special-avl` demo reads from stdin.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod command;
pub mod flat;
pub mod keys;
pub mod layout;
pub mod midpoint;
pub mod rebuild;

mod util;
