use crate::disease::class_label::{ClassLabel, CLASS_COUNT};
use crate::error::AppError;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::sync::Arc;
use tract_onnx::prelude::Tensor;

/// Random probability distribution per call. Stands in for the model when
/// no artifact is around.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(&self, _input: Tensor) -> Result<Vec<f32>, AppError> {
        let _ = self.logger.info("Classifying image with fake classifier...");

        let mut rng = rand::rng();
        let weights: Vec<f32> = (0..CLASS_COUNT).map(|_| rng.random::<f32>() + 1e-6).collect();
        let total: f32 = weights.iter().sum();

        Ok(weights.into_iter().map(|w| w / total).collect())
    }
}

/// Returns the same probabilities for every input.
pub struct ImageClassifierFixed {
    probabilities: Vec<f32>,
}

impl ImageClassifierFixed {
    pub fn new(probabilities: Vec<f32>) -> Self {
        Self { probabilities }
    }

    /// `confidence` on `label`, the remaining mass spread evenly over the
    /// other classes.
    pub fn for_label(label: ClassLabel, confidence: f32) -> Self {
        let rest = (1.0 - confidence) / (CLASS_COUNT - 1) as f32;
        let probabilities = ClassLabel::ALL
            .iter()
            .map(|l| if *l == label { confidence } else { rest })
            .collect();
        Self::new(probabilities)
    }
}

impl ImageClassifier for ImageClassifierFixed {
    fn predict(&self, _input: Tensor) -> Result<Vec<f32>, AppError> {
        Ok(self.probabilities.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_classifier::preprocess::preprocess;
    use crate::library::logger::impl_console::LoggerConsole;
    use image::DynamicImage;

    #[test]
    fn test_fake_is_a_probability_distribution() {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        let classifier = ImageClassifierFake::new(logger);
        let input = preprocess(&DynamicImage::new_rgb8(8, 8));

        let probabilities = classifier.predict(input.clone()).unwrap();
        let result = classifier.classify(input).unwrap();

        assert_eq!(probabilities.len(), CLASS_COUNT);
        assert!((probabilities.iter().sum::<f32>() - 1.0).abs() < 1e-4);
        assert!(ClassLabel::ALL.contains(&result.predicted_label));
        assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn test_fixed_for_label() {
        let classifier = ImageClassifierFixed::for_label(ClassLabel::CornCommonRust, 0.6);
        let input = preprocess(&DynamicImage::new_rgb8(8, 8));

        let result = classifier.classify(input).unwrap();

        assert_eq!(result.predicted_label, ClassLabel::CornCommonRust);
        assert_eq!(result.confidence, 0.6);
        assert!((classifier.probabilities.iter().sum::<f32>() - 1.0).abs() < 1e-4);
    }
}
