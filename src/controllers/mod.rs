pub mod explorer;
pub mod interactive;
