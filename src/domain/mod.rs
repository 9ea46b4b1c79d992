//! Domain layer: binary tree model and algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod analysis;
pub mod arena;
pub mod builder;
pub mod error;
pub mod parser;
pub mod replay;
pub mod traversal;

pub use analysis::{is_balanced, max_depth};
pub use arena::{BinaryTree, NodeId, Side, TreeNode};
pub use builder::{build_tree, NullPolicy, TreeBuilder};
pub use error::{DomainError, DomainResult};
pub use parser::parse_values;
pub use replay::{ReplayController, ReplayState};
pub use traversal::{traverse, Traversal, Walk};
