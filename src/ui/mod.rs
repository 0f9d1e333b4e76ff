pub mod common;
pub mod effects;
pub mod icon;
pub mod lead_client;
pub mod loading_screen;
pub mod navbar;
pub mod pages;
pub mod sections;

pub use icon::{Icon, icons};
pub use loading_screen::LoadingScreen;
pub use navbar::Navbar;
pub use pages::{LandingPage, NotFoundPage};
