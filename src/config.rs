use crate::cli::Args;
use crate::error::AppError;
use chrono::{Offset, Utc};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub logger_timezone: chrono::FixedOffset,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("plant_disease_detection_model.onnx"),
            logger_timezone: Utc.fix(),
            window_title: "Plant Disease Detection".to_string(),
            window_size: [720.0, 900.0],
        }
    }
}

impl Config {
    pub fn with_args(mut self, args: &Args) -> Result<Self, AppError> {
        if let Some(model_path) = &args.model {
            self.model_path = model_path.clone();
        }

        if let Some(hours) = args.utc_offset_hours {
            self.logger_timezone = hours
                .checked_mul(3600)
                .and_then(chrono::FixedOffset::east_opt)
                .ok_or_else(|| {
                    AppError::Config(format!("UTC offset of {} hours is out of range", hours))
                })?;
        }

        Ok(self)
    }
}
