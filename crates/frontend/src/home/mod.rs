pub mod customization;
pub mod sections;
pub mod settings_reader;
pub mod view;
