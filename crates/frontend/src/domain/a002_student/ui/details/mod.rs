//! Student Details UI Module
//!
//! - view_model.rs: form state, date bound and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::StudentDetails;
pub use view_model::StudentDetailsViewModel;
