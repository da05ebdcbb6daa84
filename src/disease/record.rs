use crate::disease::class_label::ClassLabel;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiseaseCategory {
    Bacterial,
    Fungal,
    Viral,
    Pest,
}

impl DiseaseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseCategory::Bacterial => "Bacterial disease",
            DiseaseCategory::Fungal => "Fungal disease",
            DiseaseCategory::Viral => "Viral disease",
            DiseaseCategory::Pest => "Pest infestation",
        }
    }
}

impl fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference text shown for a class. Healthy records carry no metadata.
/// `label` names the class the metadata was written for, which a corrected
/// copy keeps.
#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseRecord {
    pub label: ClassLabel,
    pub is_healthy: bool,
    pub category: Option<DiseaseCategory>,
    pub scientific_name: String,
    pub symptoms: Vec<String>,
    pub causes: String,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
}

impl DiseaseRecord {
    pub fn healthy(label: ClassLabel) -> Self {
        Self {
            label,
            is_healthy: true,
            category: None,
            scientific_name: String::new(),
            symptoms: vec![],
            causes: String::new(),
            treatment: vec![],
            prevention: vec![],
        }
    }
}
