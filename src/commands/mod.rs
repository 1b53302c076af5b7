//! Presentation-facing entry points.
//!
//! Each command takes the shared [`ProgressManager`], returns serde DTOs,
//! and flattens failures to the message string the UI displays.

mod dtos;
pub mod mentors;
pub mod profile;
pub mod projects;
pub mod sessions;

pub use dtos::*;

use crate::error::AppError;
use log::error;

/// Log a failed command and convert the error for the UI.
fn fail(operation: &'static str) -> impl Fn(AppError) -> String {
    move |e| {
        error!("Failed to {operation}: {e}");
        e.into()
    }
}
