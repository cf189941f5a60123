/// Fluent builders.
pub mod builder;
/// Serde configuration model.
pub mod model;
