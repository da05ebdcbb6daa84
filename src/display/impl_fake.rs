use crate::display::interface::Display;
use crate::error::AppError;
use crate::plant_doctor::render::Page;

#[derive(Default)]
pub struct DisplayFake {
    pub pages: Vec<Page>,
}

impl DisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Page> {
        self.pages.last()
    }
}

impl Display for DisplayFake {
    fn show(&mut self, page: &Page) -> Result<(), AppError> {
        self.pages.push(page.clone());
        Ok(())
    }
}
