mod convert;
mod image_ids;

pub use convert::run_convert;
pub use image_ids::run_image_ids;
