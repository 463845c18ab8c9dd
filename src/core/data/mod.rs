pub mod colour;
pub mod complex;
pub mod frame_descriptor;
pub mod point;
pub mod raster;
pub mod viewport;
pub mod worker_count;
pub mod work_item;
