//! Course Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: form state and the save command
//! - view.rs: Leptos component (pure UI)
//!
//! REST calls live in `domain::a001_course::api`.

mod view;
mod view_model;

pub use view::CourseDetails;
pub use view_model::CourseDetailsViewModel;
