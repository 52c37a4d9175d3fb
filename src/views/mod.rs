mod home;
mod navbar;
mod cta;
mod faq;
mod popup;
mod contact;
mod not_found;

pub use home::Home;
pub use navbar::Navbar;
pub use cta::{ CtaButton, CtaLink };
pub use faq::Faq;
pub use popup::PromoPopup;
pub use contact::ContactSection;
pub use not_found::PageNotFound;
