pub mod charts;
pub mod text_field;
pub mod topic_tree;
