use crate::disease::class_label::{ClassLabel, SUPPORTED_PLANTS};
use crate::disease::correction_store::interface::CorrectionStore;
use crate::disease::record::DiseaseRecord;
use crate::plant_doctor::core::{Classified, Notice, State};
use image::DynamicImage;
use std::sync::Arc;

pub const TITLE: &str = "Plant Disease Detection";
pub const UPLOAD_PROMPT: &str = "Drag and drop an image here";
pub const PREDICTED_CLASS: &str = "Predicted Class:";
pub const CONFIDENCE_LEVEL: &str = "Confidence Level:";
pub const UPLOADED_IMAGE: &str = "Uploaded Image:";
pub const TYPE: &str = "Type:";
pub const SCIENTIFIC_NAME: &str = "Scientific Name:";
pub const SYMPTOMS: &str = "Symptoms:";
pub const CAUSE: &str = "Cause:";
pub const TREATMENT: &str = "Treatment and Control:";
pub const PREVENTION: &str = "Prevention:";
pub const CORRECT_PREDICTION: &str = "Correct Prediction";
pub const SELECT_CLASS: &str = "Select the correct class";
pub const UPDATE_MODEL: &str = "Update Model";

/// Everything the single page shows for the current state.
#[derive(Clone)]
pub struct Page {
    pub supported_plants_note: String,
    pub status: Option<String>,
    pub notice: Option<Notice>,
    pub result: Option<ResultSection>,
}

#[derive(Clone)]
pub struct ResultSection {
    pub predicted_label: ClassLabel,
    pub confidence: String,
    pub image_name: String,
    pub image: Arc<DynamicImage>,
    /// Absent for healthy predictions, and when a correction stored a healthy
    /// record under the predicted label.
    pub disease: Option<DiseaseRecord>,
    pub correction: CorrectionSection,
}

#[derive(Clone)]
pub struct CorrectionSection {
    pub options: Vec<ClassLabel>,
    pub selected: Option<ClassLabel>,
    pub busy: bool,
}

pub fn format_confidence(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}

pub fn supported_plants_note() -> String {
    format!("Note: Only supported plants are: {}", SUPPORTED_PLANTS.join(", "))
}

fn result_section(
    classified: &Classified,
    store: &dyn CorrectionStore,
    busy: bool,
) -> ResultSection {
    let predicted_label = classified.prediction.predicted_label;
    let disease = if predicted_label.is_healthy() {
        None
    } else {
        Some(store.lookup(predicted_label)).filter(|record| !record.is_healthy)
    };

    ResultSection {
        predicted_label,
        confidence: format_confidence(classified.prediction.confidence),
        image_name: classified.upload.name.clone(),
        image: classified.upload.image.clone(),
        disease,
        correction: CorrectionSection {
            options: ClassLabel::ALL.to_vec(),
            selected: classified.selected,
            busy,
        },
    }
}

pub fn render(state: &State, store: &dyn CorrectionStore) -> Page {
    let mut page = Page {
        supported_plants_note: supported_plants_note(),
        status: None,
        notice: None,
        result: None,
    };

    match state {
        State::Idle { notice } => {
            page.notice = notice.clone();
        }
        State::AwaitingClassification { name } => {
            page.status = Some(format!("Classifying {}...", name));
        }
        State::Classified(classified) => {
            page.notice = classified.notice.clone();
            page.result = Some(result_section(classified, store, false));
        }
        State::Correcting(classified) => {
            page.status = Some("Updating model...".to_string());
            page.result = Some(result_section(classified, store, true));
        }
    }

    page
}
