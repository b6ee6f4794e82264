// Resume scoring engine.
// Implements: tokenization, keyword / length / formatting / readability sub-scorers,
// aggregation with fault containment, and the Analysis API handlers.
// Everything below `handlers` is synchronous and free of I/O.

pub mod engine;
pub mod formatting;
pub mod handlers;
pub mod keywords;
pub mod length;
pub mod readability;
pub mod report;
pub mod rubric;
pub mod text;

// Re-export the public API consumed by main and the router.
pub use engine::ScoringEngine;
