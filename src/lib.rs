pub mod calculations;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod plans;
pub mod repositories;
pub mod routes;
pub mod stats;
