//! Input processing module
//! Handles file detection, byte decoding and text extraction for the CLI.
//! The analysis engine itself never touches the filesystem.

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
