pub mod bridge;
pub mod renderer_model;
pub mod richtext;
