pub mod error;
pub mod render;
pub mod scorer;
pub mod tokenizer;
pub mod upload;
