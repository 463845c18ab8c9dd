pub mod calculate_row_bands;
pub mod pixel_to_complex_coords;
