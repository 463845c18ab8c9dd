pub mod executor_backend;
pub mod generate_fractal;
pub mod generate_fractal_parallel_rayon;
pub mod generate_fractal_parallel_scoped_threads;
pub mod ports;
