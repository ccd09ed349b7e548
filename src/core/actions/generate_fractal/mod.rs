mod fill_row;
pub mod generate_fractal_parallel_rayon;
pub mod generate_fractal_row_per_thread;
pub mod generate_fractal_row_queue;
pub mod generate_fractal_serial;
pub mod ports;
pub mod render_error;
pub mod render_scheduler;
mod worker_pool;

#[cfg(test)]
mod test_support;
