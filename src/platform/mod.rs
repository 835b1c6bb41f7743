pub mod renderer;

pub mod font;
pub(crate) mod os;
