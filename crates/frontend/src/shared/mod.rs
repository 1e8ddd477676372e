pub mod api;
pub mod clipboard;
pub mod column_filter;
pub mod components;
pub mod config;
pub mod csv_import;
pub mod data_table;
pub mod date_utils;
pub mod export;
pub mod file_picker;
pub mod icons;
pub mod modal_frame;
