//! UI Components
//!
//! Reusable Leptos components.

mod burndown_chart;
mod guideline_form;
mod help_modal;
mod homework_form;
mod homework_list;
mod period_form;
mod print_layout;
mod remove_homework_button;
mod share_button;
mod workload_fields;

pub use burndown_chart::BurndownChart;
pub use guideline_form::GuidelineForm;
pub use help_modal::HelpModal;
pub use homework_form::HomeworkForm;
pub use homework_list::HomeworkList;
pub use period_form::PeriodForm;
pub use print_layout::PrintLayout;
pub use remove_homework_button::RemoveHomeworkButton;
pub use share_button::ShareButton;
pub use workload_fields::{WorkloadDraft, WorkloadFields};
