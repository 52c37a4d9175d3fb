mod site;

pub use site::SiteError;
