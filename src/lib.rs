pub mod collect;
pub mod config;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod http_client;
pub mod standings;
pub mod tables;
pub mod teams;
