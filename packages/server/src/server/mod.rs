// HTTP server - thin JSON transport over the domain actions

pub mod app;
pub mod middleware;
pub mod routes;
