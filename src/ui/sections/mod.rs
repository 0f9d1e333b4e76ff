//! Page sections, top to bottom

mod about;
mod contact;
mod faq;
mod footer;
mod hero;
mod portfolio;
mod process;
mod solutions;
mod testimonials;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use faq::FaqSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use portfolio::PortfolioSection;
pub use process::ProcessSection;
pub use solutions::SolutionsSection;
pub use testimonials::TestimonialsSection;
