use crate::disease::class_label::ClassLabel;
use crate::disease::record::DiseaseRecord;
use crate::error::AppError;

/// Mutable, non-durable view over the knowledge base.
pub trait CorrectionStore {
    /// Record currently associated with `label`: the corrected copy if one
    /// was stored, else the base record.
    fn lookup(&self, label: ClassLabel) -> DiseaseRecord;

    /// Stores a copy of whatever `predicted` currently maps to under
    /// `corrected`. Rejects `predicted == corrected` without touching the store.
    fn correct(&mut self, predicted: ClassLabel, corrected: ClassLabel) -> Result<(), AppError>;

    #[cfg(test)]
    fn lookup_by_name(&self, label: &str) -> Result<DiseaseRecord, AppError> {
        Ok(self.lookup(label.parse()?))
    }
}
