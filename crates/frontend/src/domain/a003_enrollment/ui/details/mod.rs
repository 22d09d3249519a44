//! Enrollment Details UI Module
//!
//! - view_model.rs: selected pair and the enroll command
//! - view.rs: the two selects (pure UI)

mod view;
mod view_model;

pub use view::EnrollmentDetails;
pub use view_model::EnrollmentDetailsViewModel;
