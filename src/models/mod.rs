mod chat;
mod document;
mod history;
mod task;
mod tool;

pub use chat::*;
pub use document::*;
pub use history::*;
pub use task::*;
pub use tool::*;
