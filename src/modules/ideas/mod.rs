pub mod controller;
pub mod fallback;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod prompt;
pub mod routes;
pub mod schema;
