//! UI components for DocForge

pub mod catalog;
pub mod preview;
pub mod selection;
