use crate::disease::class_label::ClassLabel;
use crate::error::AppError;
use crate::image_classifier::interface::PredictionResult;
use image::DynamicImage;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Info(String),
    Error(String),
}

#[derive(Clone)]
pub struct Upload {
    pub name: String,
    pub image: Arc<DynamicImage>,
}

#[derive(Clone)]
pub struct Classified {
    pub upload: Upload,
    pub prediction: PredictionResult,
    pub selected: Option<ClassLabel>,
    pub notice: Option<Notice>,
}

#[derive(Clone)]
pub enum State {
    Idle {
        notice: Option<Notice>,
    },
    AwaitingClassification {
        name: String,
    },
    Classified(Classified),
    Correcting(Classified),
}

/// What a successful classification hands back to the controller.
pub struct Classification {
    pub upload: Upload,
    pub prediction: PredictionResult,
}

pub enum Event {
    ImageUploaded { name: String, bytes: Vec<u8> },
    UploadFailed(AppError),
    ClassifyDone(Result<Classification, AppError>),
    LabelSelected(Option<ClassLabel>),
    CorrectionConfirmed,
    CorrectDone(Result<(), AppError>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ImageUploaded { name, bytes } => {
                format!("ImageUploaded({}, {} bytes)", name, bytes.len())
            }
            Event::UploadFailed(e) => format!("UploadFailed({})", e),
            Event::ClassifyDone(Ok(c)) => format!(
                "ClassifyDone(Ok({}, {:.4}))",
                c.prediction.predicted_label, c.prediction.confidence
            ),
            Event::ClassifyDone(Err(e)) => format!("ClassifyDone(Err({}))", e),
            Event::LabelSelected(label) => format!("LabelSelected({:?})", label),
            Event::CorrectionConfirmed => "CorrectionConfirmed".to_string(),
            Event::CorrectDone(Ok(())) => "CorrectDone(Ok)".to_string(),
            Event::CorrectDone(Err(e)) => format!("CorrectDone(Err({}))", e),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Classify {
        name: String,
        bytes: Vec<u8>,
    },
    Correct {
        predicted: ClassLabel,
        corrected: ClassLabel,
    },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Classify { name, bytes } => {
                format!("Classify({}, {} bytes)", name, bytes.len())
            }
            effect => format!("{:?}", effect),
        }
    }
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            State::Idle { .. } => "Idle",
            State::AwaitingClassification { .. } => "AwaitingClassification",
            State::Classified(_) => "Classified",
            State::Correcting(_) => "Correcting",
        }
    }
}

pub const MODEL_UPDATED: &str = "Model updated successfully!";

pub fn init() -> (State, Vec<Effect>) {
    (State::Idle { notice: None }, vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        // A new upload discards whatever was on screen.
        (_, Event::ImageUploaded { name, bytes }) => (
            State::AwaitingClassification { name: name.clone() },
            vec![Effect::Classify { name, bytes }],
        ),
        (_, Event::UploadFailed(e)) => (
            State::Idle {
                notice: Some(Notice::Error(e.to_string())),
            },
            vec![],
        ),

        (State::AwaitingClassification { .. }, Event::ClassifyDone(Ok(classification))) => (
            State::Classified(Classified {
                upload: classification.upload,
                prediction: classification.prediction,
                selected: Some(classification.prediction.predicted_label),
                notice: None,
            }),
            vec![],
        ),
        (State::AwaitingClassification { .. }, Event::ClassifyDone(Err(e))) => (
            State::Idle {
                notice: Some(Notice::Error(e.to_string())),
            },
            vec![],
        ),

        (State::Classified(classified), Event::LabelSelected(selected)) => (
            State::Classified(Classified {
                selected,
                notice: None,
                ..classified
            }),
            vec![],
        ),
        (State::Classified(classified), Event::CorrectionConfirmed) => {
            let predicted = classified.prediction.predicted_label;
            match classified.selected {
                Some(corrected) if corrected != predicted => (
                    State::Correcting(Classified {
                        notice: None,
                        ..classified
                    }),
                    vec![Effect::Correct {
                        predicted,
                        corrected,
                    }],
                ),
                Some(_) => (
                    State::Classified(Classified {
                        notice: Some(Notice::Info(format!(
                            "{} is already the predicted class, nothing to update",
                            predicted
                        ))),
                        ..classified
                    }),
                    vec![],
                ),
                None => (
                    State::Classified(Classified {
                        notice: Some(Notice::Info("Select a class first".to_string())),
                        ..classified
                    }),
                    vec![],
                ),
            }
        }

        (State::Correcting(classified), Event::CorrectDone(Ok(()))) => (
            State::Classified(Classified {
                notice: Some(Notice::Success(MODEL_UPDATED.to_string())),
                ..classified
            }),
            vec![],
        ),
        (State::Correcting(classified), Event::CorrectDone(Err(e))) => (
            State::Classified(Classified {
                notice: Some(Notice::Info(e.to_string())),
                ..classified
            }),
            vec![],
        ),

        (state, _) => (state, vec![]),
    }
}
