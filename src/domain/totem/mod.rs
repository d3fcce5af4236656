pub mod compositor;
pub mod pattern;

pub use compositor::{composite, TOTEM_HEIGHT, TOTEM_WIDTH};
pub use pattern::assemble;
