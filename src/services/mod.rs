pub mod fetch_service;
pub mod report_service;
