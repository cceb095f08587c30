//! Car Advisor - AI-powered car recommendations.
//!
//! A password-gated JSON API that walks a buyer through a preference
//! questionnaire, asks an LLM for matching cars, and offers comparison,
//! expert chat, owner reviews, and report export over the results.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
