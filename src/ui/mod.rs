pub mod collector;
pub mod countdown;
pub mod messages;
pub mod prompt;
pub mod summary;
pub mod terminal;
