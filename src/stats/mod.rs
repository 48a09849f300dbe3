pub mod catalog;
pub mod percentage;
pub mod scoring;
