//! Terminal presentation shared by the dropdown and the host view.

pub mod theme;
