pub mod mandelbrot;
pub mod movie;
pub mod ports;
