//! Domain layer for fleetdesk - entity models, repository traits, services

pub mod model;
pub mod repository;
pub mod service;
