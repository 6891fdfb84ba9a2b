pub mod day;
pub mod input;

pub use day::Day;
pub use input::{InputSection, InputValues};
