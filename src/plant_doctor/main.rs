use crate::config::Config;
use crate::disease::correction_store::impl_in_memory::CorrectionStoreInMemory;
use crate::disease::correction_store::interface::CorrectionStore;
use crate::error::AppError;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::plant_doctor::core::{init, transition, Event, State};
use crate::plant_doctor::render::{render, Page};
use crate::upload::read_upload;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

/// One user session: its own page state and correction store, sharing the
/// classifier with every other session.
pub struct PlantDoctor {
    pub(super) state: State,
    pub(super) logger: Arc<dyn Logger + Send + Sync>,
    pub(super) image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub(super) store: Box<dyn CorrectionStore + Send>,
}

impl PlantDoctor {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        store: Box<dyn CorrectionStore + Send>,
    ) -> Self {
        let (state, effects) = init();
        let mut plant_doctor = Self {
            state,
            logger: logger.with_namespace("plant_doctor"),
            image_classifier,
            store,
        };

        for effect in effects {
            let event = plant_doctor.run_effect(effect);
            plant_doctor.send(event);
        }

        plant_doctor
    }

    /// Loads the model named in `config` and opens a fresh session on it.
    /// Fails with `ModelUnavailable` before anything is shown.
    pub fn start(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Result<Self, AppError> {
        let image_classifier = ImageClassifierTractOnnx::new(&config.model_path, logger.clone())?;
        let store = CorrectionStoreInMemory::new(logger.clone());
        Ok(Self::new(logger, Arc::new(image_classifier), Box::new(store)))
    }

    /// Feeds an event through the state machine, running every effect it
    /// produces before returning.
    pub fn send(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let old_state = self.state.name();
            let event_display = event.to_display_string();

            let (new_state, effects) = transition(self.state.clone(), event);

            let _ = self.logger.info(&format!(
                "{} --{}--> {} effects: {:?}",
                old_state,
                event_display,
                new_state.name(),
                effects
                    .iter()
                    .map(|effect| effect.to_display_string())
                    .collect::<Vec<_>>()
            ));

            self.state = new_state;

            for effect in effects {
                queue.push_back(self.run_effect(effect));
            }
        }
    }

    pub fn upload_path(&mut self, path: &Path) {
        let event = match read_upload(path) {
            Ok((name, bytes)) => Event::ImageUploaded { name, bytes },
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Upload of {} failed: {}", path.display(), e));
                Event::UploadFailed(e)
            }
        };
        self.send(event);
    }

    #[cfg(test)]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn CorrectionStore {
        self.store.as_ref()
    }

    pub fn page(&self) -> Page {
        render(&self.state, self.store.as_ref())
    }
}
