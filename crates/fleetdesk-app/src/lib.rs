//! Application service layer - config, repositories, import orchestration, reports

pub mod config;
pub mod import_service;
pub mod report_service;
pub mod repository;
pub mod sample_data;
