pub mod engine;
pub mod mapping;
pub mod options;
