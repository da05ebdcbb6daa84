use crate::disease::class_label::{ClassLabel, CLASS_COUNT};
use crate::error::AppError;
use tract_onnx::prelude::Tensor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub predicted_label: ClassLabel,
    pub confidence: f32,
}

impl PredictionResult {
    /// Picks the most probable class. Ties go to the lowest index.
    pub fn from_probabilities(probabilities: &[f32]) -> Result<Self, AppError> {
        if probabilities.len() != CLASS_COUNT {
            return Err(AppError::Inference(format!(
                "expected {} class scores, got {}",
                CLASS_COUNT,
                probabilities.len()
            )));
        }

        let (index, confidence) = argmax(probabilities)
            .ok_or_else(|| AppError::Inference("model produced no finite scores".to_string()))?;

        Ok(Self {
            predicted_label: ClassLabel::from_index(index)?,
            confidence,
        })
    }
}

/// Index and value of the largest element, first occurrence on ties. NaN never wins.
pub fn argmax(values: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, best_value)) if v <= best_value => {}
            _ => best = Some((i, v)),
        }
    }
    best
}

pub trait ImageClassifier: Send + Sync {
    /// One forward pass over a (1, 256, 256, 3) tensor. Returns one score per
    /// class in catalog order.
    fn predict(&self, input: Tensor) -> Result<Vec<f32>, AppError>;

    fn classify(&self, input: Tensor) -> Result<PredictionResult, AppError> {
        let probabilities = self.predict(input)?;
        PredictionResult::from_probabilities(&probabilities)
    }
}
