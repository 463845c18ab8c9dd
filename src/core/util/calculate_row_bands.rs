use std::ops::Range;

use crate::core::data::worker_count::WorkerCount;

/// Splits `0..height` into one contiguous band per worker.
///
/// Every worker gets `height / workers` rows; the last one also takes the
/// remainder. With more workers than rows the leading bands are empty and the
/// last band covers the whole image.
#[must_use]
pub fn calculate_row_bands(height: u32, workers: WorkerCount) -> Vec<Range<u32>> {
    let total_bands = workers.get();
    let band_height = height / total_bands;

    (0..total_bands)
        .map(|band_num| {
            let band_top = band_num * band_height;
            let band_bottom = if band_num == total_bands - 1 {
                height
            } else {
                (band_num + 1) * band_height
            };

            band_top..band_bottom
        })
        .collect()
}
