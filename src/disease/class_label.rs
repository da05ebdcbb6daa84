use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Number of classes the classifier is trained on. The model's output
/// vector must have exactly this many entries.
pub const CLASS_COUNT: usize = 19;

pub const SUPPORTED_PLANTS: [&str; 4] = ["Bell Pepper", "Corn", "Potato", "Tomato"];

/// One of the fixed plant/disease-state identifiers the classifier can output.
/// Variant order is the model's output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassLabel {
    BellPepperBacterialSpot,
    BellPepperHealthy,
    CornCommonRust,
    CornGrayLeafSpot,
    CornHealthy,
    CornNorthernLeafBlight,
    PotatoEarlyBlight,
    PotatoHealthy,
    PotatoLateBlight,
    TomatoBacterialSpot,
    TomatoEarlyBlight,
    TomatoHealthy,
    TomatoLateBlight,
    TomatoLeafMold,
    TomatoSeptoriaLeafSpot,
    TomatoSpiderMites,
    TomatoTargetSpot,
    TomatoMosaicVirus,
    TomatoYellowLeafCurlVirus,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; CLASS_COUNT] = [
        ClassLabel::BellPepperBacterialSpot,
        ClassLabel::BellPepperHealthy,
        ClassLabel::CornCommonRust,
        ClassLabel::CornGrayLeafSpot,
        ClassLabel::CornHealthy,
        ClassLabel::CornNorthernLeafBlight,
        ClassLabel::PotatoEarlyBlight,
        ClassLabel::PotatoHealthy,
        ClassLabel::PotatoLateBlight,
        ClassLabel::TomatoBacterialSpot,
        ClassLabel::TomatoEarlyBlight,
        ClassLabel::TomatoHealthy,
        ClassLabel::TomatoLateBlight,
        ClassLabel::TomatoLeafMold,
        ClassLabel::TomatoSeptoriaLeafSpot,
        ClassLabel::TomatoSpiderMites,
        ClassLabel::TomatoTargetSpot,
        ClassLabel::TomatoMosaicVirus,
        ClassLabel::TomatoYellowLeafCurlVirus,
    ];

    pub const HEALTHY: [ClassLabel; 4] = [
        ClassLabel::BellPepperHealthy,
        ClassLabel::CornHealthy,
        ClassLabel::PotatoHealthy,
        ClassLabel::TomatoHealthy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::BellPepperBacterialSpot => "Bell Pepper Bacterial Spot",
            ClassLabel::BellPepperHealthy => "Bell Pepper Healthy",
            ClassLabel::CornCommonRust => "Corn Common Rust",
            ClassLabel::CornGrayLeafSpot => "Corn Gray Leaf Spot",
            ClassLabel::CornHealthy => "Corn Healthy",
            ClassLabel::CornNorthernLeafBlight => "Corn Northern Leaf Blight",
            ClassLabel::PotatoEarlyBlight => "Potato Early Blight",
            ClassLabel::PotatoHealthy => "Potato Healthy",
            ClassLabel::PotatoLateBlight => "Potato Late Blight",
            ClassLabel::TomatoBacterialSpot => "Tomato Bacterial Spot",
            ClassLabel::TomatoEarlyBlight => "Tomato Early Blight",
            ClassLabel::TomatoHealthy => "Tomato Healthy",
            ClassLabel::TomatoLateBlight => "Tomato Late Blight",
            ClassLabel::TomatoLeafMold => "Tomato Leaf Mold",
            ClassLabel::TomatoSeptoriaLeafSpot => "Tomato Septoria Leaf Spot",
            ClassLabel::TomatoSpiderMites => "Tomato Spider Mites",
            ClassLabel::TomatoTargetSpot => "Tomato Target Spot",
            ClassLabel::TomatoMosaicVirus => "Tomato Mosaic Virus",
            ClassLabel::TomatoYellowLeafCurlVirus => "Tomato Yellow Leaf Curl Virus",
        }
    }

    /// Position of this label in the model's output vector.
    #[cfg(test)]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, AppError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| AppError::UnknownLabel(format!("class index {}", index)))
    }

    pub fn is_healthy(&self) -> bool {
        Self::HEALTHY.contains(self)
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassLabel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|label| label.as_str() == s)
            .copied()
            .ok_or_else(|| AppError::UnknownLabel(s.to_string()))
    }
}
