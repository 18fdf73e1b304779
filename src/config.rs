use clap::Parser;

/// Convert CCPD dataset annotations to Pascal VOC XML format.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the CCPD dataset folder containing images
    #[arg(long = "ccpd_folder")]
    pub ccpd_folder: String,

    /// Path to the output folder where XML files will be saved
    #[arg(long = "output_folder")]
    pub output_folder: String,
}
