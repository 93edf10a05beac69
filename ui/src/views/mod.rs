mod home;
pub use home::{Home, Section, SECTIONS};
