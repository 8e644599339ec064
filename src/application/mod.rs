/// High level client implementing every resource service
pub mod client;
/// Application configuration module
pub mod config;
/// Resource service traits
pub mod interfaces;
