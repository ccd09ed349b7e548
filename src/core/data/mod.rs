pub mod complex;
pub mod pixel_grid;
pub mod point;
pub mod render_config;
pub mod viewport;
