//! Pascal VOC annotation records
//!
//! This module builds the single-object VOC document written for every CCPD image and can
//! read such a document back.

use quick_xml::se::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{BoundingBox, CcpdAnnotation, ImageInfo, OBJECT_NAME};

// Declaration line as written by minidom
const XML_DECLARATION: &str = "<?xml version=\"1.0\" ?>\n";
const INDENT_SIZE: usize = 3;

/// VOC `<size>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocSize {
    pub width: u32,
    pub height: u32,
    pub depth: u8,
}

/// VOC `<object>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocObject {
    pub name: String,
    pub pose: String,
    pub truncated: u8,
    pub difficult: u8,
    pub bndbox: BoundingBox,
}

/// A VOC `<annotation>` document holding exactly one object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "annotation")]
pub struct VocAnnotation {
    pub folder: String,
    pub filename: String,
    pub size: VocSize,
    pub object: VocObject,
}

impl VocAnnotation {
    pub fn new(annotation: &CcpdAnnotation, filename: &str, folder: &str, image: ImageInfo) -> Self {
        Self {
            folder: folder.to_string(),
            filename: filename.to_string(),
            size: VocSize {
                width: image.width,
                height: image.height,
                depth: image.depth,
            },
            object: VocObject {
                name: OBJECT_NAME.to_string(),
                pose: "Unspecified".to_string(),
                truncated: 0,
                difficult: 0,
                bndbox: annotation.bounding_box,
            },
        }
    }

    /// Render the document with a declaration line and 3-space indentation.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::from(XML_DECLARATION);
        let mut serializer = Serializer::with_root(&mut xml, Some("annotation"))?;
        serializer.indent(' ', INDENT_SIZE);
        self.serialize(serializer)?;
        xml.push('\n');
        Ok(xml)
    }

    pub fn from_xml(xml: &str) -> Result<Self> {
        Ok(quick_xml::de::from_str(xml)?)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.object.bndbox
    }

    pub fn image_info(&self) -> ImageInfo {
        ImageInfo {
            width: self.size.width,
            height: self.size.height,
            depth: self.size.depth,
        }
    }
}
