use super::main::PlantDoctor;
use crate::error::AppError;
use crate::image_classifier::preprocess::preprocess;
use crate::plant_doctor::core::{Classification, Effect, Event, Upload};
use crate::upload::decode_upload;
use std::sync::Arc;

impl PlantDoctor {
    /// Runs one effect to completion and reports its outcome as an event.
    pub fn run_effect(&mut self, effect: Effect) -> Event {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::Classify { name, bytes } => {
                Event::ClassifyDone(self.classify_upload(name, &bytes))
            }
            Effect::Correct {
                predicted,
                corrected,
            } => Event::CorrectDone(self.store.correct(predicted, corrected)),
        }
    }

    fn classify_upload(&self, name: String, bytes: &[u8]) -> Result<Classification, AppError> {
        let image = decode_upload(&name, bytes)?;
        let input = preprocess(&image);
        let prediction = self.image_classifier.classify(input)?;

        Ok(Classification {
            upload: Upload {
                name,
                image: Arc::new(image),
            },
            prediction,
        })
    }
}
