use glob::{glob, Pattern};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::types::{IMAGE_EXTENSION, XML_EXTENSION};

/// List the CCPD images directly inside `dir` (no recursion).
///
/// Directories whose names happen to end in the image extension are skipped.
pub fn list_ccpd_images(dir: &Path) -> Result<Vec<PathBuf>> {
    // glob reports nothing for a missing directory, so check it up front
    let metadata = fs::metadata(dir).map_err(|e| ConvertError::io(dir, e))?;
    if !metadata.is_dir() {
        return Err(ConvertError::io(
            dir,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let pattern = format!(
        "{}/*{}",
        Pattern::escape(&dir.to_string_lossy()),
        IMAGE_EXTENSION
    );

    let mut images = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            images.push(path);
        }
    }
    Ok(images)
}

/// Output file name for an image: the image name with its extension swapped for `.xml`
pub fn xml_file_name(image_name: &str) -> String {
    image_name.replace(IMAGE_EXTENSION, XML_EXTENSION)
}

/// Write a rendered annotation, replacing any previous file at `path`
pub fn write_voc_xml(xml: &str, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(xml.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::io(path, e))
}
