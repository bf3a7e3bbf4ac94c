//! linkboard - a small URL shortener with a server-rendered admin list
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line interface
//!
//! # Architecture
//! - `interfaces::admin_page`: the admin list renderer and its page shell
//! - `storage`: SeaORM storage backend
//! - `services`: link business rules shared by HTTP and CLI
//! - `api`: HTTP routes and middleware
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging and signal handling

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
