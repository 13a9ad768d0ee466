// Application Layer - Use Cases and Business Logic

pub mod aggregator;
pub mod block;
pub mod constants;
pub mod context;
pub mod rewriter;

// Re-exports
pub use aggregator::ConfigAggregator;
pub use block::BlockFormat;
pub use context::RunContext;
pub use rewriter::{RewritePlan, TableRewriter};
