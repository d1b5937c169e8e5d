pub mod connection_settings;
pub mod http;
pub mod lookupd_address;
pub mod queries;
