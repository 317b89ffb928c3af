pub mod expansion;
pub mod tree;

pub use expansion::ExpandedSections;
pub use tree::{nav_tree, NavItem};
