pub mod ast;
pub mod error;
pub mod parser;

#[cfg(test)]
mod tests;
