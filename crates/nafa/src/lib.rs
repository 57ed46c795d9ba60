//! `nafa` - Journey planning with crowdsourced sensory annotations
//!
//! This library provides a sample journey of transport segments rated for
//! noise, light and crowding, an in-memory store for user-submitted sensory
//! annotations, and the HTTP service that exposes both.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod annotation;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod journey;
pub mod logging;
pub mod render;
pub mod storage;

pub use annotation::{Annotation, NewAnnotation};
pub use api::AppState;
pub use config::Config;
pub use error::{Error, Result};
pub use journey::{Journey, JourneyRecord, JourneyView, SAMPLE_JOURNEY_ID};
pub use logging::init_logging;
pub use storage::AnnotationStore;
