pub mod consumption;
pub mod ingestion;
pub mod response;
