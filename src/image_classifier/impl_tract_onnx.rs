use crate::disease::class_label::CLASS_COUNT;
use crate::error::AppError;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::preprocess::INPUT_SIZE;
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

/// Pre-trained leaf classifier exported to ONNX. Loaded once; the runnable
/// plan is immutable and safe to share between sessions.
pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(model_path: &Path, logger: Arc<dyn Logger + Send + Sync>) -> Result<Self, AppError> {
        let logger = logger.with_namespace("image_classifier");
        let unavailable = |reason: String| AppError::ModelUnavailable {
            path: model_path.display().to_string(),
            reason,
        };

        if !model_path.is_file() {
            return Err(unavailable("file not found".to_string()));
        }

        let _ = logger.info(&format!("Loading model from {}", model_path.display()));

        let size = INPUT_SIZE as usize;
        let model = tract_onnx::onnx()
            .model_for_path(model_path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, size, size, 3]).into()))
            .and_then(|model| model.into_optimized())
            .map_err(|e| unavailable(e.to_string()))?;

        let class_count = output_class_count(&model).map_err(unavailable)?;
        if class_count != CLASS_COUNT {
            return Err(unavailable(format!(
                "model outputs {} classes, knowledge base has {}",
                class_count, CLASS_COUNT
            )));
        }

        let model = model
            .into_runnable()
            .map_err(|e| unavailable(e.to_string()))?;

        let _ = logger.info("Model loaded");

        Ok(Self { model, logger })
    }
}

fn output_class_count(model: &TypedModel) -> Result<usize, String> {
    let fact = model.output_fact(0).map_err(|e| e.to_string())?;
    match fact.shape.as_concrete() {
        Some(&[.., classes]) => Ok(classes),
        _ => Err(format!("output shape {:?} is not concrete", fact.shape)),
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(&self, input: Tensor) -> Result<Vec<f32>, AppError> {
        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| AppError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| AppError::Inference("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| AppError::Inference(e.to_string()))?;

        let probabilities: Vec<f32> = output.iter().copied().collect();

        let _ = self
            .logger
            .info(&format!("Forward pass produced {} scores", probabilities.len()));

        Ok(probabilities)
    }
}
