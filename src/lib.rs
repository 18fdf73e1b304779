//! CCPD to Pascal VOC converter
//!
//! This library turns CCPD license-plate images, whose filenames encode their own
//! annotation, into one Pascal VOC XML file per image.

pub mod ccpd;
pub mod config;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;
pub mod voc;
pub mod voc_dataset;

// Re-export commonly used types and functions
pub use ccpd::parse_ccpd_filename;
pub use config::Args;
pub use error::{ConvertError, Result};
pub use types::{BoundingBox, CcpdAnnotation, ConversionSummary, ImageInfo};
pub use utils::read_image_info;
pub use voc::VocAnnotation;
pub use voc_dataset::{convert_image, process_dataset};
