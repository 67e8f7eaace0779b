//! Core functionality: catalog data, flattening, view model, selection,
//! printing, and configuration

pub mod catalog;
pub mod config;
pub mod flatten;
pub mod print;
pub mod selection;
pub mod view_model;
