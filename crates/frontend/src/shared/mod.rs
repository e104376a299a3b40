pub mod api_utils;
pub mod config;
pub mod list_endpoints;
pub mod list_query;
