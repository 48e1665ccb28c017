pub mod common;
pub mod completions;
pub mod export;
pub mod note;
pub mod notebook;
pub mod show;
pub mod theme;
