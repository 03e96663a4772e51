pub mod list;
pub mod render;
