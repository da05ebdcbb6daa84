use crate::error::AppError;
use crate::plant_doctor::render::Page;

/// Headless sink for a rendered page.
pub trait Display {
    fn show(&mut self, page: &Page) -> Result<(), AppError>;
}
