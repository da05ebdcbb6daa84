use crate::display::interface::Display;
use crate::error::AppError;
use crate::plant_doctor::core::Notice;
use crate::plant_doctor::render::{
    Page, CAUSE, CONFIDENCE_LEVEL, PREDICTED_CLASS, PREVENTION, SCIENTIFIC_NAME, SYMPTOMS, TITLE,
    TREATMENT, TYPE, UPLOADED_IMAGE,
};

pub struct DisplayConsole {}

impl DisplayConsole {
    pub fn new() -> Self {
        Self {}
    }
}

fn push_list(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    lines.push(heading.to_string());
    for item in items {
        lines.push(format!("- {}", item));
    }
}

/// Plain-text rendition of the page, one entry per printed line.
pub fn page_lines(page: &Page) -> Vec<String> {
    let mut lines = vec![page.supported_plants_note.clone(), TITLE.to_string()];

    if let Some(status) = &page.status {
        lines.push(status.clone());
    }

    match &page.notice {
        Some(Notice::Success(message)) => lines.push(format!("[ok] {}", message)),
        Some(Notice::Info(message)) => lines.push(format!("[info] {}", message)),
        Some(Notice::Error(message)) => lines.push(format!("[error] {}", message)),
        None => {}
    }

    let Some(result) = &page.result else {
        return lines;
    };

    lines.push(PREDICTED_CLASS.to_string());
    lines.push(result.predicted_label.to_string());
    lines.push(CONFIDENCE_LEVEL.to_string());
    lines.push(result.confidence.clone());
    lines.push(UPLOADED_IMAGE.to_string());
    lines.push(format!(
        "{} ({}x{})",
        result.image_name,
        result.image.width(),
        result.image.height()
    ));

    if let Some(disease) = &result.disease {
        lines.push(TYPE.to_string());
        lines.push(
            disease
                .category
                .map(|category| category.to_string())
                .unwrap_or_default(),
        );
        lines.push(SCIENTIFIC_NAME.to_string());
        lines.push(disease.scientific_name.clone());
        push_list(&mut lines, SYMPTOMS, &disease.symptoms);
        lines.push(CAUSE.to_string());
        lines.push(disease.causes.clone());
        push_list(&mut lines, TREATMENT, &disease.treatment);
        push_list(&mut lines, PREVENTION, &disease.prevention);
    }

    lines
}

impl Display for DisplayConsole {
    fn show(&mut self, page: &Page) -> Result<(), AppError> {
        for line in page_lines(page) {
            println!("{}", line);
        }
        Ok(())
    }
}
