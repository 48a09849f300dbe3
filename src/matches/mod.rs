pub mod access;
pub mod lifecycle;
pub mod validation;
