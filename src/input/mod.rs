//! Input processing module
//! Handles file detection, text extraction and resume loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
