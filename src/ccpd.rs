//! CCPD filename decoding
//!
//! A CCPD image name carries its own annotation:
//!
//! ```text
//! <area>-<htilt>_<vtilt>-<xmin>&<ymin>_<xmax>&<ymax>-<vertices>-<plate indices>-<brightness>-<blurriness>.jpg
//! ```
//!
//! Only the bounding box is extracted. The area and tilt fields are decoded so that a
//! malformed prefix is still rejected, then dropped.

use crate::error::{ConvertError, Result};
use crate::types::{BoundingBox, CcpdAnnotation, IMAGE_EXTENSION};

/// Province abbreviations, indexed by the first plate character index.
pub const PROVINCES: [&str; 34] = [
    "皖", "沪", "津", "渝", "冀", "晋", "蒙", "辽", "吉", "黑", "苏", "浙", "京", "闽", "赣", "鲁",
    "豫", "鄂", "湘", "粤", "桂", "琼", "川", "贵", "云", "藏", "陕", "甘", "青", "宁", "新", "警",
    "学", "O",
];

/// City letters, indexed by the second plate character index.
pub const ALPHABETS: [&str; 25] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "J", "K", "L", "M", "N", "P", "Q", "R", "S", "T", "U",
    "V", "W", "X", "Y", "Z", "O",
];

/// Letters and digits for the remaining plate characters.
pub const ADS: [&str; 35] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "J", "K", "L", "M", "N", "P", "Q", "R", "S", "T", "U",
    "V", "W", "X", "Y", "Z", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "O",
];

/// Decode the bounding box encoded in a CCPD filename.
pub fn parse_ccpd_filename(filename: &str) -> Result<CcpdAnnotation> {
    let stem = filename.replace(IMAGE_EXTENSION, "");
    let parts: Vec<&str> = stem.split('-').collect();

    parse_int(filename, field(filename, &parts, 0, "area field")?)?;

    let tilt: Vec<&str> = field(filename, &parts, 1, "tilt field")?.split('_').collect();
    parse_int(filename, field(filename, &tilt, 0, "horizontal tilt")?)?;
    parse_int(filename, field(filename, &tilt, 1, "vertical tilt")?)?;

    let corners: Vec<&str> = field(filename, &parts, 2, "bounding box field")?
        .split('_')
        .collect();
    let (xmin, ymin) = parse_corner(filename, field(filename, &corners, 0, "top-left corner")?)?;
    let (xmax, ymax) =
        parse_corner(filename, field(filename, &corners, 1, "bottom-right corner")?)?;

    Ok(CcpdAnnotation {
        bounding_box: BoundingBox {
            xmin,
            ymin,
            xmax,
            ymax,
        },
    })
}

// `x&y`; anything after the second component is ignored
fn parse_corner(filename: &str, corner: &str) -> Result<(i64, i64)> {
    let coords: Vec<&str> = corner.split('&').collect();
    let x = parse_int(filename, field(filename, &coords, 0, "x coordinate")?)?;
    let y = parse_int(filename, field(filename, &coords, 1, "y coordinate")?)?;
    Ok((x, y))
}

fn field<'a>(
    filename: &str,
    parts: &[&'a str],
    index: usize,
    what: &'static str,
) -> Result<&'a str> {
    parts
        .get(index)
        .copied()
        .ok_or_else(|| ConvertError::MissingField {
            name: filename.to_string(),
            field: what,
        })
}

fn parse_int(filename: &str, value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|source| ConvertError::InvalidNumber {
            name: filename.to_string(),
            value: value.to_string(),
            source,
        })
}
