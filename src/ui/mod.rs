pub mod icons;
pub mod render;
pub mod theme;

pub use theme::{Palette, Theme};
