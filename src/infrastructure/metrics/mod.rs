pub mod null;

// Re-export the factory function for easy access
pub use null::create as create_null_metrics;
