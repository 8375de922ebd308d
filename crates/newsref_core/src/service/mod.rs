//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into list-view level APIs.
//! - Keep front ends decoupled from storage details.

pub mod article_service;
