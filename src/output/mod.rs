pub mod directory;
pub mod document_set;
pub mod navigation;
pub mod unit;
