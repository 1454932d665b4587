pub mod course;
pub mod mapping;
pub mod validation;
