pub mod draw_command;

pub use draw_command::{DrawCommand, GlyphEffect, RenderDefaults};
