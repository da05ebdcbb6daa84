//! Static reference table of disease metadata, keyed by class label.

use crate::disease::class_label::ClassLabel;
use crate::disease::record::{DiseaseCategory, DiseaseRecord};

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn disease(
    label: ClassLabel,
    category: DiseaseCategory,
    scientific_name: &str,
    symptoms: &[&str],
    causes: &str,
    treatment: &[&str],
    prevention: &[&str],
) -> DiseaseRecord {
    DiseaseRecord {
        label,
        is_healthy: false,
        category: Some(category),
        scientific_name: scientific_name.to_string(),
        symptoms: to_owned(symptoms),
        causes: causes.to_string(),
        treatment: to_owned(treatment),
        prevention: to_owned(prevention),
    }
}

pub fn base_record(label: ClassLabel) -> DiseaseRecord {
    match label {
        ClassLabel::BellPepperBacterialSpot => disease(
            label,
            DiseaseCategory::Bacterial,
            "Xanthomonas campestris pv. vesicatoria",
            &[
                "Water-soaked spots on leaves, stems, and fruit.",
                "Spots may be dark brown or black with a yellow halo.",
                "Lesions can coalesce, leading to wilting and death of affected tissue.",
                "Fruit may develop raised, corky lesions with a rough texture.",
                "Severely infected fruit may rot.",
            ],
            "Bacterial spot in bell peppers is caused by the bacterium Xanthomonas campestris pv. vesicatoria. The bacteria can enter the plant through wounds, natural openings, or by splashing water.",
            &[
                "Remove and destroy infected plant material to reduce the source of bacteria.",
                "Practice crop rotation to prevent the buildup of bacteria in the soil.",
                "Avoid overhead irrigation to minimize water splashing and bacterial spread.",
                "Use copper-based fungicides or bactericides as a preventive measure or early treatment.",
                "Follow proper sanitation practices by disinfecting tools and equipment between uses.",
                "Plant resistant or tolerant bell pepper varieties when available.",
            ],
            &[
                "Plant disease-free or certified pathogen-free seeds or seedlings.",
                "Maintain adequate spacing between plants to promote air circulation and drying of foliage.",
                "Avoid working in wet conditions or handling plants when they are wet.",
                "Keep the garden free of weeds and debris, as they can harbor the bacteria.",
                "Monitor plants regularly for early signs of infection and take immediate action.",
            ],
        ),
        ClassLabel::BellPepperHealthy => DiseaseRecord::healthy(label),
        ClassLabel::CornCommonRust => disease(
            label,
            DiseaseCategory::Fungal,
            "Puccinia sorghi",
            &[
                "Orange or reddish-brown pustules or lesions on leaves, husks, and other above-ground plant parts",
                "Pustules may rupture and release powdery spores",
                "Yellowing and drying of infected leaves",
                "Reduced plant growth and yield",
            ],
            "Fungal infection by Puccinia sorghi",
            &[
                "Plant resistant corn varieties when available",
                "Fungicide application can be considered in severe cases, following label instructions",
                "Remove and destroy infected plant material to reduce the source of spores",
                "Crop rotation with non-host plants can help break the disease cycle",
            ],
            &[
                "Plant corn varieties with resistance to common rust",
                "Ensure proper spacing between plants for good air circulation",
                "Avoid excessive nitrogen fertilization, as it can promote disease development",
                "Avoid working in wet conditions or handling plants when they are wet",
                "Monitor plants regularly for early signs of infection and take immediate action",
            ],
        ),
        ClassLabel::CornGrayLeafSpot => disease(
            label,
            DiseaseCategory::Fungal,
            "Cercospora zeae-maydis",
            &[
                "Small, rectangular lesions with gray centers and dark borders on leaves",
                "Lesions may expand and merge, causing extensive damage",
                "Yellowing and drying of infected leaves",
                "Premature defoliation",
            ],
            "Fungal infection by Cercospora zeae-maydis",
            &[
                "Plant corn hybrids with genetic resistance to gray leaf spot",
                "Fungicide application can be considered in severe cases, following label instructions",
                "Crop rotation with non-host plants can help reduce disease pressure",
                "Remove and destroy infected plant material to reduce the source of inoculum",
            ],
            &[
                "Ensure proper plant spacing for good air circulation",
                "Avoid excessive nitrogen fertilization, as it can promote disease development",
                "Practice field sanitation by removing crop debris after harvest",
                "Monitor plants regularly for early signs of infection and take immediate action",
            ],
        ),
        ClassLabel::CornHealthy => DiseaseRecord::healthy(label),
        ClassLabel::CornNorthernLeafBlight => disease(
            label,
            DiseaseCategory::Fungal,
            "Setosphaeria turcica",
            &[
                "Long, elliptical lesions with tan or grayish color on leaves",
                "Lesions may have dark borders and extend along the length of the leaf",
                "Severe infections can cause extensive leaf damage and defoliation",
                "Reduced plant growth and yield",
            ],
            "Fungal infection by Setosphaeria turcica",
            &[
                "Plant corn hybrids with genetic resistance to northern leaf blight",
                "Fungicide application can be considered in severe cases, following label instructions",
                "Crop rotation with non-host plants can help break the disease cycle",
                "Remove and destroy infected plant material to reduce the source of spores",
            ],
            &[
                "Ensure proper plant spacing for good air circulation",
                "Avoid excessive nitrogen fertilization, as it can promote disease development",
                "Practice field sanitation by removing crop debris after harvest",
                "Monitor plants regularly for early signs of infection and take immediate action",
            ],
        ),
        ClassLabel::PotatoEarlyBlight => disease(
            label,
            DiseaseCategory::Fungal,
            "Alternaria solani",
            &[
                "Circular to irregular-shaped brown lesions on leaves, starting from lower leaves and progressing upward",
                "Lesions may have concentric rings or dark margins",
                "Yellowing and wilting of infected leaves",
                "Premature defoliation",
            ],
            "Fungal infection by Alternaria solani",
            &[
                "Plant potato cultivars with resistance to early blight",
                "Fungicide application can be considered in severe cases, following label instructions",
                "Ensure proper spacing between plants for good air circulation",
                "Practice field sanitation by removing infected plant debris",
            ],
            &[
                "Rotate potato crops with non-host plants for at least two years",
                "Avoid overhead irrigation to minimize leaf wetness",
                "Plant certified disease-free potato seed tubers",
                "Monitor plants regularly for early signs of infection and take immediate action",
            ],
        ),
        ClassLabel::PotatoHealthy => DiseaseRecord::healthy(label),
        ClassLabel::PotatoLateBlight => disease(
            label,
            DiseaseCategory::Fungal,
            "Phytophthora infestans",
            &[
                "Water-soaked lesions on leaves, stems, and tubers",
                "Lesions rapidly enlarge and turn dark brown to purplish-black",
                "White, fuzzy growth may appear on the underside of leaves under humid conditions",
                "Foul odor from rotting tubers",
            ],
            "Fungal infection by Phytophthora infestans",
            &[
                "Plant potato cultivars with resistance to late blight",
                "Fungicide application is often necessary, following label instructions and appropriate timing",
                "Remove and destroy infected plant material immediately to reduce the source of spores",
                "Properly dispose of infected tubers to prevent overwintering of the pathogen",
            ],
            &[
                "Plant certified disease-free potato seed tubers",
                "Ensure proper spacing between plants for good air circulation",
                "Avoid overhead irrigation and water plants at the base to minimize leaf wetness",
                "Monitor plants regularly for early signs of infection and take immediate action",
                "Practice field sanitation by removing crop debris after harvest",
            ],
        ),
        ClassLabel::TomatoBacterialSpot => disease(
            label,
            DiseaseCategory::Bacterial,
            "Xanthomonas vesicatoria",
            &[
                "Water-soaked spots on leaves, stems, and fruit",
                "Spots may be dark brown to black with a yellow halo",
                "Lesions can coalesce, leading to wilting and death of affected tissue",
                "Fruit may develop raised, corky lesions with a rough texture",
            ],
            "Bacterial infection by Xanthomonas vesicatoria",
            &[
                "Plant tomato varieties with resistance to bacterial spot, if available",
                "Apply copper-based bactericides as a preventive measure or early treatment",
                "Remove and destroy infected plant material to reduce the source of bacteria",
                "Practice crop rotation to prevent the buildup of bacteria in the soil",
            ],
            &[
                "Use certified disease-free tomato seeds or seedlings",
                "Ensure proper plant spacing for good air circulation",
                "Avoid overhead irrigation to minimize water splashing and bacterial spread",
                "Practice field sanitation by removing crop debris after harvest",
                "Monitor plants regularly for early signs of infection and take immediate action",
            ],
        ),
        ClassLabel::TomatoEarlyBlight => disease(
            label,
            DiseaseCategory::Fungal,
            "Alternaria solani",
            &[
                "Circular to irregular-shaped brown lesions on leaves",
                "Lesions may have concentric rings or dark margins",
                "Lower leaves are usually affected first",
                "Yellowing and wilting of infected leaves",
            ],
            "Fungal infection by Alternaria solani",
            &[
                "Remove and destroy infected plant material to reduce the source of spores",
                "Apply fungicides according to label instructions and appropriate timing",
                "Ensure proper plant spacing for good air circulation",
                "Practice crop rotation with non-host plants to break the disease cycle",
            ],
            &[
                "Plant disease-resistant tomato varieties, if available",
                "Avoid overhead irrigation and water plants at the base to minimize leaf wetness",
                "Apply mulch to reduce soil splash onto the lower leaves",
                "Practice field sanitation by removing crop debris after harvest",
                "Monitor plants regularly for early signs of infection and take immediate action",
            ],
        ),
        ClassLabel::TomatoHealthy => DiseaseRecord::healthy(label),
        ClassLabel::TomatoLateBlight => disease(
            label,
            DiseaseCategory::Fungal,
            "Phytophthora infestans",
            &[
                "Dark, water-soaked lesions on leaves, stems, and fruit",
                "Lesions rapidly enlarge and turn brown to black",
                "White, fuzzy growth may appear on the underside of leaves under humid conditions",
                "Fruit rot and decay with a foul odor",
            ],
            "Fungal infection by Phytophthora infestans",
            &[
                "Remove and destroy infected plant material immediately to reduce the spread of spores",
                "Apply fungicides according to label instructions and appropriate timing",
                "Maintain good airflow by pruning and staking tomato plants",
                "Ensure proper plant spacing for good air circulation",
            ],
            &[
                "Plant disease-resistant tomato varieties, if available",
                "Avoid overhead irrigation and water plants at the base to minimize leaf wetness",
                "Apply mulch to reduce soil splash onto the lower leaves",
                "Practice crop rotation with non-host plants to break the disease cycle",
                "Monitor plants regularly for early signs of infection and take immediate action",
            ],
        ),
        ClassLabel::TomatoLeafMold => disease(
            label,
            DiseaseCategory::Fungal,
            "Passalora fulva (formerly known as Fulvia fulva)",
            &[
                "Pale yellow or light green areas on upper leaf surfaces",
                "Velvety olive-green to brown patches on lower leaf surfaces",
                "Affected leaves may curl and become distorted",
                "Yellowing and wilting of infected leaves",
            ],
            "Fungal infection by Passalora fulva",
            &[
                "Remove and destroy infected plant material to reduce the source of spores",
                "Ensure good air circulation by proper plant spacing and pruning",
                "Avoid overhead irrigation and water plants at the base to minimize leaf wetness",
                "Apply fungicides according to label instructions and appropriate timing",
            ],
            &[
                "Plant disease-resistant tomato varieties, if available",
                "Avoid overcrowding and provide proper plant spacing for good air circulation",
                "Promote healthy plant growth through balanced fertilization and watering practices",
                "Apply mulch to reduce soil splash onto the lower leaves",
                "Monitor plants regularly for early signs of infection and take immediate action",
            ],
        ),
        ClassLabel::TomatoSeptoriaLeafSpot => disease(
            label,
            DiseaseCategory::Fungal,
            "Septoria lycopersici",
            &[
                "Numerous small, circular spots with dark brown centers and yellow halos on lower leaves",
                "Spots may coalesce and cause leaves to turn yellow and drop prematurely",
                "Leaves may have a \"shot-hole\" appearance with tiny holes in the center of spots",
                "Fruit is usually not affected by the disease",
            ],
            "Fungal infection by Septoria lycopersici",
            &[
                "Remove and destroy infected plant material to reduce the source of spores",
                "Ensure proper plant spacing for good air circulation",
                "Apply fungicides according to label instructions and appropriate timing",
                "Avoid overhead irrigation and water plants at the base to minimize leaf wetness",
            ],
            &[
                "Plant disease-resistant tomato varieties, if available",
                "Avoid overcrowding and provide proper plant spacing for good air circulation",
                "Promote healthy plant growth through balanced fertilization and watering practices",
                "Apply mulch to reduce soil splash onto the lower leaves",
                "Practice crop rotation with non-host plants to break the disease cycle",
            ],
        ),
        ClassLabel::TomatoSpiderMites => disease(
            label,
            DiseaseCategory::Pest,
            "Tetranychus urticae (commonly known as Two-Spotted Spider Mite)",
            &[
                "Fine webbing on the undersides of leaves",
                "Tiny yellow or white speckles on leaves",
                "Leaves may turn yellow, dry out, or become stippled",
                "Severe infestations can cause defoliation and reduced plant vigor",
            ],
            "Infestation by Tetranychus urticae (Two-Spotted Spider Mite)",
            &[
                "Spray affected plants with a strong stream of water to dislodge and control mites",
                "Introduce predatory mites or beneficial insects to help control the population",
                "Use insecticidal soap, neem oil, or horticultural oils as a natural control method",
                "Consider applying acaricides if infestation is severe and other methods are ineffective",
            ],
            &[
                "Maintain proper plant hygiene and remove weeds or debris that can harbor mites",
                "Avoid over-fertilization, as it can promote mite populations",
                "Monitor plants regularly for early signs of infestation and take immediate action",
                "Provide adequate plant nutrition and avoid water stress to promote plant vigor",
            ],
        ),
        ClassLabel::TomatoTargetSpot => disease(
            label,
            DiseaseCategory::Fungal,
            "Corynespora cassiicola",
            &[
                "Circular to irregular-shaped lesions on leaves, stems, and fruit",
                "Lesions have concentric rings and a target-like appearance",
                "Lesions may start as small, dark spots and enlarge over time",
                "Affected tissue may turn brown or black and become necrotic",
            ],
            "Fungal infection by Corynespora cassiicola",
            &[
                "Remove and destroy infected plant material to reduce the source of spores",
                "Ensure proper plant spacing for good air circulation",
                "Apply fungicides according to label instructions and appropriate timing",
                "Avoid overhead irrigation and water plants at the base to minimize leaf wetness",
            ],
            &[
                "Plant disease-resistant tomato varieties, if available",
                "Avoid overhead irrigation and water plants at the base to minimize leaf wetness",
                "Apply mulch to reduce soil splash onto the lower leaves",
                "Practice crop rotation with non-host plants to break the disease cycle",
                "Monitor plants regularly for early signs of infection and take immediate action",
            ],
        ),
        ClassLabel::TomatoMosaicVirus => disease(
            label,
            DiseaseCategory::Viral,
            "Tomato mosaic virus (ToMV)",
            &[
                "Mottled or streaked yellowing on leaves",
                "Leaf distortion and curling",
                "Reduced plant growth and stunted development",
                "Fruit may show mosaic patterns or exhibit color distortions",
            ],
            "Infection by Tomato mosaic virus (ToMV)",
            &[
                "There is no cure for viral infections, so prevention is key",
                "Plant resistant tomato varieties, if available",
                "Control aphids and other insect vectors that can transmit the virus",
                "Remove and destroy infected plants to prevent further spread",
            ],
            &[
                "Use disease-free seeds or certified virus-free transplants",
                "Sanitize tools and equipment to prevent virus transmission",
                "Manage weed populations that can serve as virus reservoirs",
                "Control insect vectors through appropriate insecticide applications",
                "Avoid working in the garden when hands are contaminated with tobacco or other infected plants",
            ],
        ),
        ClassLabel::TomatoYellowLeafCurlVirus => disease(
            label,
            DiseaseCategory::Viral,
            "Tomato yellow leaf curl virus (TYLCV)",
            &[
                "Yellowing and upward curling of leaves, particularly young leaves",
                "Leaf narrowing and reduced leaf size",
                "Stunted plant growth and reduced vigor",
                "Abnormal development of flowers and fruits",
            ],
            "Infection by Tomato yellow leaf curl virus (TYLCV)",
            &[
                "There is no cure for viral infections, so prevention is crucial",
                "Plant resistant tomato varieties, specifically bred for TYLCV resistance",
                "Control whiteflies and other insect vectors that transmit the virus",
                "Remove and destroy infected plants to prevent further spread",
            ],
            &[
                "Use disease-free seeds or certified virus-free transplants",
                "Use physical barriers such as insect netting to exclude whiteflies",
                "Implement cultural practices to minimize whitefly populations, such as removing weed hosts",
                "Practice good weed and pest management to reduce the presence of alternative hosts",
                "Avoid working in the garden when hands are contaminated with virus-infected plants",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_metadata(record: &DiseaseRecord) -> bool {
        record.category.is_some()
            || !record.scientific_name.is_empty()
            || !record.symptoms.is_empty()
            || !record.causes.is_empty()
            || !record.treatment.is_empty()
            || !record.prevention.is_empty()
    }

    #[test]
    fn test_healthy_iff_designated_healthy_label() {
        for label in ClassLabel::ALL {
            let record = base_record(label);
            assert_eq!(record.label, label);
            assert_eq!(record.is_healthy, label.is_healthy(), "{}", label);
            if record.is_healthy {
                assert!(!has_metadata(&record), "{} carries metadata", label);
            } else {
                assert!(record.category.is_some());
                assert!(!record.scientific_name.is_empty());
                assert!(!record.symptoms.is_empty());
                assert!(!record.causes.is_empty());
                assert!(!record.treatment.is_empty());
                assert!(!record.prevention.is_empty());
            }
        }
    }

    #[test]
    fn test_tomato_early_blight_symptoms() {
        let record = base_record(ClassLabel::TomatoEarlyBlight);
        assert_eq!(record.category, Some(DiseaseCategory::Fungal));
        assert_eq!(
            record.symptoms,
            vec![
                "Circular to irregular-shaped brown lesions on leaves",
                "Lesions may have concentric rings or dark margins",
                "Lower leaves are usually affected first",
                "Yellowing and wilting of infected leaves",
            ]
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            base_record(ClassLabel::BellPepperBacterialSpot).category,
            Some(DiseaseCategory::Bacterial)
        );
        assert_eq!(
            base_record(ClassLabel::TomatoSpiderMites).category,
            Some(DiseaseCategory::Pest)
        );
        assert_eq!(
            base_record(ClassLabel::TomatoMosaicVirus).category,
            Some(DiseaseCategory::Viral)
        );
        assert_eq!(
            base_record(ClassLabel::CornCommonRust).scientific_name,
            "Puccinia sorghi"
        );
    }
}
