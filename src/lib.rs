pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod health;
pub mod oauth;
pub mod render;
pub mod types;
pub mod web;
