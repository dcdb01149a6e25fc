pub mod diagnostic;
pub mod gene;
pub mod neighbor;
pub mod schema;
