pub mod discussions;
pub mod faqs;
pub mod images;
pub mod resources;
