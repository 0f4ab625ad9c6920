//! Multilingual citizen services: government scheme eligibility, a scripted
//! assistant, student support and career guidance.

pub mod accounts;
pub mod assistant;
pub mod career;
pub mod config;
pub mod error;
pub mod language;
pub mod schemes;
pub mod student;
pub mod telemetry;
