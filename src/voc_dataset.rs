use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::ccpd::parse_ccpd_filename;
use crate::config::Args;
use crate::error::Result;
use crate::io::{list_ccpd_images, write_voc_xml, xml_file_name};
use crate::types::{ConversionSummary, VOC_FOLDER};
use crate::utils::{create_output_directory, create_progress_bar, read_image_info};
use crate::voc::VocAnnotation;

/// Convert every CCPD image in `args.ccpd_folder` into a VOC XML file in `args.output_folder`.
///
/// Images are handled one at a time in listing order. The first failure aborts the run;
/// files written before it are left in place.
pub fn process_dataset(args: &Args) -> Result<ConversionSummary> {
    let ccpd_dir = Path::new(&args.ccpd_folder);
    let output_dir = create_output_directory(Path::new(&args.output_folder))?;

    let images = list_ccpd_images(ccpd_dir)?;
    info!("Found {} images in {}", images.len(), ccpd_dir.display());

    let pb = create_progress_bar(images.len() as u64, "CCPD");
    let mut summary = ConversionSummary::default();
    for image_path in &images {
        if let Err(e) = convert_image(image_path, &output_dir) {
            pb.abandon();
            return Err(e);
        }
        summary.increment_converted();
        pb.inc(1);
    }
    pb.finish_with_message("Conversion complete");

    Ok(summary)
}

/// Convert a single image and return the path of the XML file written for it
pub fn convert_image(image_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = image_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let annotation = parse_ccpd_filename(&file_name)?;
    let image_info = read_image_info(image_path)?;
    let xml = VocAnnotation::new(&annotation, &file_name, VOC_FOLDER, image_info).to_xml()?;

    let xml_output_path = output_dir.join(xml_file_name(&file_name));
    write_voc_xml(&xml, &xml_output_path)?;
    debug!("Saved: {}", xml_output_path.display());

    Ok(xml_output_path)
}
