use crate::config::Config;
use crate::error::AppError;
use crate::plant_doctor::core::{Event, Notice};
use crate::plant_doctor::main::PlantDoctor;
use crate::plant_doctor::render::{
    Page, ResultSection, CAUSE, CONFIDENCE_LEVEL, CORRECT_PREDICTION, PREDICTED_CLASS, PREVENTION,
    SCIENTIFIC_NAME, SELECT_CLASS, SYMPTOMS, TITLE, TREATMENT, TYPE, UPDATE_MODEL, UPLOADED_IMAGE,
    UPLOAD_PROMPT,
};
use eframe::egui;
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;

const PRIMARY: egui::Color32 = egui::Color32::from_rgb(0x00, 0x80, 0x80);
const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0x00, 0xCC, 0x96);
const ERROR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x5C, 0x58);

/// The interactive page. egui drives the loop, so the window owns the session.
struct PlantDoctorWindow {
    plant_doctor: PlantDoctor,
    path_input: String,
    texture: Option<(Arc<DynamicImage>, egui::TextureHandle)>,
}

impl PlantDoctorWindow {
    fn new(plant_doctor: PlantDoctor) -> Self {
        Self {
            plant_doctor,
            path_input: String::new(),
            texture: None,
        }
    }

    /// Only the first dropped file counts.
    fn take_dropped_file(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        match (file.bytes, file.path) {
            (Some(bytes), _) => self.plant_doctor.send(Event::ImageUploaded {
                name: file.name,
                bytes: bytes.to_vec(),
            }),
            (None, Some(path)) => self.plant_doctor.upload_path(&path),
            (None, None) => {}
        }
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        image: &Arc<DynamicImage>,
    ) -> egui::TextureHandle {
        if let Some((cached, handle)) = &self.texture {
            if Arc::ptr_eq(cached, image) {
                return handle.clone();
            }
        }

        let rgba = image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let handle = ctx.load_texture(
            "uploaded-image",
            color_image,
            egui::TextureOptions::default(),
        );

        self.texture = Some((image.clone(), handle.clone()));
        handle
    }

    fn show_page(
        &mut self,
        ui: &mut egui::Ui,
        page: &Page,
        events: &mut Vec<Event>,
        open_path: &mut Option<PathBuf>,
    ) {
        ui.label(egui::RichText::new(page.supported_plants_note.as_str()).strong());
        ui.heading(egui::RichText::new(TITLE).color(PRIMARY).size(28.0));
        ui.add_space(8.0);

        ui.label(UPLOAD_PROMPT);
        ui.horizontal(|ui| {
            ui.label("or open a file:");
            let response = ui.text_edit_singleline(&mut self.path_input);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (ui.button("Open").clicked() || submitted) && !self.path_input.trim().is_empty() {
                *open_path = Some(PathBuf::from(self.path_input.trim()));
            }
        });
        ui.add_space(8.0);

        if let Some(status) = &page.status {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(status.as_str());
            });
        }

        match &page.notice {
            Some(Notice::Success(message)) => {
                ui.colored_label(SUCCESS, message.as_str());
            }
            Some(Notice::Info(message)) => {
                ui.label(message.as_str());
            }
            Some(Notice::Error(message)) => {
                ui.colored_label(ERROR, message.as_str());
            }
            None => {}
        }

        if let Some(result) = &page.result {
            self.show_result(ui, result, events);
        }
    }

    fn show_result(&mut self, ui: &mut egui::Ui, result: &ResultSection, events: &mut Vec<Event>) {
        section(ui, PREDICTED_CLASS);
        ui.label(result.predicted_label.as_str());
        section(ui, CONFIDENCE_LEVEL);
        ui.label(result.confidence.as_str());

        section(ui, UPLOADED_IMAGE);
        let handle = self.texture_for(ui.ctx(), &result.image);
        ui.add(
            egui::Image::new(egui::load::SizedTexture::from_handle(&handle))
                .max_width(ui.available_width())
                .maintain_aspect_ratio(true),
        );
        ui.small(result.image_name.as_str());

        if let Some(disease) = &result.disease {
            section(ui, TYPE);
            ui.label(
                disease
                    .category
                    .map(|category| category.as_str())
                    .unwrap_or_default(),
            );
            section(ui, SCIENTIFIC_NAME);
            ui.label(disease.scientific_name.as_str());
            bullet_section(ui, SYMPTOMS, &disease.symptoms);
            section(ui, CAUSE);
            ui.label(disease.causes.as_str());
            bullet_section(ui, TREATMENT, &disease.treatment);
            bullet_section(ui, PREVENTION, &disease.prevention);
        }

        section(ui, CORRECT_PREDICTION);
        let correction = &result.correction;
        let mut selected = correction.selected;
        ui.add_enabled_ui(!correction.busy, |ui| {
            egui::ComboBox::from_label(SELECT_CLASS)
                .selected_text(selected.map(|label| label.as_str()).unwrap_or_default())
                .show_ui(ui, |ui| {
                    for label in &correction.options {
                        ui.selectable_value(&mut selected, Some(*label), label.as_str());
                    }
                });
            if ui.button(UPDATE_MODEL).clicked() {
                events.push(Event::CorrectionConfirmed);
            }
        });

        if selected != correction.selected {
            // Selection must land before a confirm issued in the same frame.
            events.insert(0, Event::LabelSelected(selected));
        }
    }
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(egui::RichText::new(title).strong().size(18.0).color(PRIMARY));
}

fn bullet_section(ui: &mut egui::Ui, title: &str, items: &[String]) {
    section(ui, title);
    for item in items {
        ui.label(format!("- {}", item));
    }
}

impl eframe::App for PlantDoctorWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.take_dropped_file(ctx);

        let page = self.plant_doctor.page();
        let mut events = Vec::new();
        let mut open_path = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_page(ui, &page, &mut events, &mut open_path);
            });
        });

        if let Some(path) = open_path {
            self.plant_doctor.upload_path(&path);
        }
        for event in events {
            self.plant_doctor.send(event);
        }
    }
}

/// Blocks until the window is closed.
pub fn run_window(config: &Config, plant_doctor: PlantDoctor) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    let window = PlantDoctorWindow::new(plant_doctor);

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Box::new(window)),
    )
    .map_err(|e| AppError::Display(e.to_string()))
}
