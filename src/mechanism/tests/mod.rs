//! Cross-module tests for the mechanism pipeline.
