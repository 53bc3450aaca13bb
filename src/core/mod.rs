pub mod alias;
pub mod resolve;
pub mod segment;
pub mod slug;
pub mod tree;
pub mod types;
