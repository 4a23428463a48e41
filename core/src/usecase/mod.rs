pub mod generate;

pub use generate::{GenerateGraphUseCase, GeneratedGraph};
