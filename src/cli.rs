use clap::Parser;
use std::path::PathBuf;

/// Classify plant leaf images into disease categories
#[derive(Parser, Debug)]
#[command(name = "plant-disease-detection")]
#[command(about = "Classify plant leaf images and show disease reference information")]
#[command(version)]
pub struct Args {
    /// Path to the ONNX model artifact
    #[arg(short, long, env = "PLANT_DISEASE_MODEL")]
    pub model: Option<PathBuf>,

    /// Classify this image once and print the page instead of opening a window
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Offset from UTC, in hours, used for log timestamps
    #[arg(long, env = "PLANT_DISEASE_UTC_OFFSET", allow_negative_numbers = true)]
    pub utc_offset_hours: Option<i32>,
}
