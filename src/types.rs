use serde::{Deserialize, Serialize};

// Only this extension is picked up from the input directory
pub const IMAGE_EXTENSION: &str = ".jpg";

pub const XML_EXTENSION: &str = ".xml";

// Folder label written into every annotation
pub const VOC_FOLDER: &str = "JPEGImages";

// The single object class in CCPD
pub const OBJECT_NAME: &str = "license_plate";

/// Axis-aligned box in pixel coordinates, as encoded in the third filename field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: i64,
    pub ymin: i64,
    pub xmax: i64,
    pub ymax: i64,
}

/// Pixel dimensions and channel count read from the image file itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub depth: u8,
}

// Result of decoding a CCPD filename; only the bounding box is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcpdAnnotation {
    pub bounding_box: BoundingBox,
}

// Outcome of a completed conversion run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub converted: usize,
}

impl ConversionSummary {
    pub fn increment_converted(&mut self) {
        self.converted += 1;
    }

    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("XML annotations written: {}", self.converted);
    }
}
