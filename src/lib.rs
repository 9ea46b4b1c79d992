//! Binary tree visualizer core.
//!
//! Builds a binary tree from a level-order value list, reports depth and
//! balance, and replays the four traversal orders one node per tick.
//!
//! ```
//! use btviz::domain::{build_tree, traverse, Traversal};
//!
//! let tree = build_tree(&[Some(2), Some(1), Some(3)]);
//! let order = traverse(&tree, Traversal::InOrder);
//! assert_eq!(tree.values_of(&order), vec![1, 2, 3]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
