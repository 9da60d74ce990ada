pub mod policy;
pub mod scraping;
