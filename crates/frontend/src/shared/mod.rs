pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod confirm_dialog;
pub mod date_utils;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod toast;
