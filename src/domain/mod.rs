pub mod category;
pub mod color;
