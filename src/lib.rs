pub mod config;
pub mod form;
pub mod output;
pub mod scoring;
pub mod sheet;
