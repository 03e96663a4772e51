pub mod meta;
pub mod owner;
