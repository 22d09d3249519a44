pub mod header;

pub use header::{is_active, Header, NavItem, NAV_ITEMS};
