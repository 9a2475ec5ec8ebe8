pub mod display_setting;
pub mod page_kind;
pub mod saved_customization;
