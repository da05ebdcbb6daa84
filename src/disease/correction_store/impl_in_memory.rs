use crate::disease::class_label::ClassLabel;
use crate::disease::correction_store::interface::CorrectionStore;
use crate::disease::knowledge_base::base_record;
use crate::disease::record::DiseaseRecord;
use crate::error::AppError;
use crate::library::logger::interface::Logger;
use std::collections::HashMap;
use std::sync::Arc;

/// Overlay of corrected records on top of the static knowledge base. Lives as
/// long as its owning session; nothing is written to disk.
pub struct CorrectionStoreInMemory {
    overlay: HashMap<ClassLabel, DiseaseRecord>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl CorrectionStoreInMemory {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            overlay: HashMap::new(),
            logger: logger.with_namespace("correction_store"),
        }
    }
}

impl CorrectionStore for CorrectionStoreInMemory {
    fn lookup(&self, label: ClassLabel) -> DiseaseRecord {
        match self.overlay.get(&label) {
            Some(record) => record.clone(),
            None => base_record(label),
        }
    }

    fn correct(&mut self, predicted: ClassLabel, corrected: ClassLabel) -> Result<(), AppError> {
        if predicted == corrected {
            return Err(AppError::InvalidCorrection(format!(
                "{} is already the predicted class",
                corrected
            )));
        }

        let record = self.lookup(predicted);
        let _ = self.logger.info(&format!(
            "Storing metadata of {} (predicted {}) under {}",
            record.label, predicted, corrected
        ));
        self.overlay.insert(corrected, record);

        Ok(())
    }
}
