#[cfg(test)]
mod plant_doctor_test {
    use crate::config::Config;
    use crate::disease::class_label::ClassLabel;
    use crate::disease::knowledge_base::base_record;
    use crate::disease::record::DiseaseCategory;
    use crate::display::impl_console::page_lines;
    use crate::display::impl_fake::DisplayFake;
    use crate::display::interface::Display;
    use crate::error::AppError;
    use crate::library::logger::impl_console::LoggerConsole;
    use crate::plant_doctor::core::{Event, Notice, State, MODEL_UPDATED};
    use crate::plant_doctor::main::PlantDoctor;
    use crate::plant_doctor::render::SYMPTOMS;
    use crate::plant_doctor::tests::fixture::{leaf_png, Fixture};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn upload(fixture: &mut Fixture) {
        fixture.plant_doctor.send(Event::ImageUploaded {
            name: "leaf.png".to_string(),
            bytes: leaf_png(),
        });
    }

    #[test]
    fn test_idle_page_shows_only_supported_plants() {
        let f = Fixture::predicting(ClassLabel::TomatoHealthy, 0.9);

        let page = f.plant_doctor.page();

        assert!(page.supported_plants_note.contains("Bell Pepper, Corn, Potato, Tomato"));
        assert!(page.result.is_none());
        assert!(page.notice.is_none());
        assert!(page.status.is_none());
    }

    #[test]
    fn test_healthy_prediction_has_no_disease_section() {
        let mut f = Fixture::predicting(ClassLabel::TomatoHealthy, 0.95);

        upload(&mut f);

        let page = f.plant_doctor.page();
        let result = page.result.expect("classified page");
        assert_eq!(result.predicted_label, ClassLabel::TomatoHealthy);
        assert!(result.disease.is_none());
        assert!(!page_lines(&f.plant_doctor.page())
            .iter()
            .any(|line| line == SYMPTOMS));
    }

    #[test]
    fn test_early_blight_page() {
        let mut f = Fixture::predicting(ClassLabel::TomatoEarlyBlight, 0.87);

        upload(&mut f);

        let page = f.plant_doctor.page();
        let result = page.result.clone().expect("classified page");
        assert_eq!(result.confidence, "87.00%");
        assert_eq!(result.image_name, "leaf.png");
        assert_eq!((result.image.width(), result.image.height()), (40, 30));

        let disease = result.disease.expect("disease section");
        let expected = base_record(ClassLabel::TomatoEarlyBlight).symptoms;
        assert_eq!(expected.len(), 4);
        assert_eq!(disease.symptoms, expected);

        let lines = page_lines(&page);
        let start = lines.iter().position(|line| line == SYMPTOMS).unwrap();
        let bullets: Vec<String> = expected.iter().map(|s| format!("- {}", s)).collect();
        assert_eq!(lines[start + 1..start + 5], bullets[..]);
        assert!(lines.contains(&"87.00%".to_string()));
    }

    #[test]
    fn test_selector_offers_every_label_defaulting_to_prediction() {
        let mut f = Fixture::predicting(ClassLabel::PotatoLateBlight, 0.6);

        upload(&mut f);

        let correction = f.plant_doctor.page().result.unwrap().correction;
        assert_eq!(correction.options, ClassLabel::ALL.to_vec());
        assert_eq!(correction.selected, Some(ClassLabel::PotatoLateBlight));
        assert!(!correction.busy);
    }

    #[test]
    fn test_correction_copies_predicted_metadata() {
        let mut f = Fixture::predicting(ClassLabel::CornCommonRust, 0.8);
        upload(&mut f);

        f.plant_doctor
            .send(Event::LabelSelected(Some(ClassLabel::CornGrayLeafSpot)));
        f.plant_doctor.send(Event::CorrectionConfirmed);

        let corrected = f.plant_doctor.store().lookup(ClassLabel::CornGrayLeafSpot);
        assert_eq!(corrected.category, Some(DiseaseCategory::Fungal));
        assert_eq!(corrected.scientific_name, "Puccinia sorghi");
        assert_eq!(
            f.plant_doctor.store().lookup(ClassLabel::CornCommonRust),
            base_record(ClassLabel::CornCommonRust)
        );
        assert_eq!(
            f.plant_doctor.page().notice,
            Some(Notice::Success(MODEL_UPDATED.to_string()))
        );
    }

    #[test]
    fn test_self_correction_leaves_store_unchanged() {
        let mut f = Fixture::predicting(ClassLabel::CornCommonRust, 0.8);
        upload(&mut f);

        f.plant_doctor.send(Event::CorrectionConfirmed);

        for label in ClassLabel::ALL {
            assert_eq!(f.plant_doctor.store().lookup(label), base_record(label));
        }
        assert!(matches!(
            f.plant_doctor.page().notice,
            Some(Notice::Info(_))
        ));
    }

    #[test]
    fn test_undecodable_upload_stays_idle_with_message() {
        let mut f = Fixture::predicting(ClassLabel::CornCommonRust, 0.8);

        f.plant_doctor.send(Event::ImageUploaded {
            name: "leaf.png".to_string(),
            bytes: b"not an image".to_vec(),
        });

        assert!(matches!(f.plant_doctor.state(), State::Idle { .. }));
        let page = f.plant_doctor.page();
        assert!(page.result.is_none());
        assert!(matches!(page.notice, Some(Notice::Error(_))));
    }

    #[test]
    fn test_sessions_do_not_share_corrections() {
        let mut first = Fixture::predicting(ClassLabel::CornCommonRust, 0.8);
        let second = Fixture::predicting(ClassLabel::CornCommonRust, 0.8);
        upload(&mut first);

        first
            .plant_doctor
            .send(Event::LabelSelected(Some(ClassLabel::CornHealthy)));
        first.plant_doctor.send(Event::CorrectionConfirmed);

        assert_ne!(
            first.plant_doctor.store().lookup(ClassLabel::CornHealthy),
            base_record(ClassLabel::CornHealthy)
        );
        assert_eq!(
            second.plant_doctor.store().lookup(ClassLabel::CornHealthy),
            base_record(ClassLabel::CornHealthy)
        );
    }

    #[test]
    fn test_upload_path_with_unsupported_extension() {
        let mut f = Fixture::predicting(ClassLabel::CornCommonRust, 0.8);

        f.plant_doctor.upload_path(&PathBuf::from("/tmp/leaf.tiff"));

        assert!(matches!(
            f.plant_doctor.page().notice,
            Some(Notice::Error(_))
        ));
    }

    #[test]
    fn test_upload_path_reads_file() {
        let path = std::env::temp_dir().join("plant-disease-detection-upload-test.png");
        std::fs::write(&path, leaf_png()).unwrap();
        let mut f = Fixture::predicting(ClassLabel::PotatoHealthy, 0.99);

        f.plant_doctor.upload_path(&path);

        let _ = std::fs::remove_file(&path);
        let result = f.plant_doctor.page().result.expect("classified page");
        assert_eq!(result.predicted_label, ClassLabel::PotatoHealthy);
        assert_eq!(result.image_name, "plant-disease-detection-upload-test.png");
    }

    #[test]
    fn test_display_receives_pages() {
        let mut f = Fixture::predicting(ClassLabel::TomatoMosaicVirus, 0.5);
        let mut display = DisplayFake::new();

        display.show(&f.plant_doctor.page()).unwrap();
        upload(&mut f);
        display.show(&f.plant_doctor.page()).unwrap();

        assert_eq!(display.pages.len(), 2);
        assert!(display.pages[0].result.is_none());
        let last = display.last().unwrap().result.as_ref().unwrap();
        assert_eq!(last.predicted_label, ClassLabel::TomatoMosaicVirus);
        assert_eq!(last.confidence, "50.00%");
    }

    #[test]
    fn test_start_with_missing_model_fails() {
        let config = Config {
            model_path: PathBuf::from("./missing/plant_disease_detection_model.onnx"),
            ..Config::default()
        };
        let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

        let result = PlantDoctor::start(&config, logger);

        assert!(matches!(result, Err(AppError::ModelUnavailable { .. })));
    }
}
