pub mod mandelbrot;
pub mod ports;
