//! Domain Model
//!
//! Plain data for the burndown sheet plus the transitions that produce a new
//! application state from the previous one.

mod period;
mod item;
mod guideline;
mod print_data;

pub use period::Period;
pub use item::{ItemId, WorkItem, Workload};
pub use guideline::GuidelineSettings;
pub use print_data::PrintData;
