// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Library DB client library
pub mod library_db;

// Flat query service over the external user_details table
pub mod user_data;
