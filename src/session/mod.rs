pub mod core;
pub mod interpret_effect;
pub mod main;
pub mod render;
pub mod run;
#[cfg(test)]
mod tests;
