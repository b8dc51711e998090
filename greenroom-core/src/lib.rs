pub mod artist_search;
pub mod config;
pub mod demo;
pub mod directory;
pub mod directory_server;
