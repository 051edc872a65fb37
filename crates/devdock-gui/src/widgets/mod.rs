//! Custom widgets

mod output;
mod preview;

pub use output::{copy_button, error_label, output_field};
pub use preview::ImagePreview;
