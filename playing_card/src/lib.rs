pub use canvas::*;
pub use card_view::*;
pub use geometry::*;
pub use label::*;
pub use text::*;
pub use view::*;

#[cfg(test)]
mod arbitrary;
mod canvas;
mod card_view;
mod geometry;
mod label;
mod text;
mod view;
