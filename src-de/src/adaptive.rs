//! Tests for adaptive differential evolution strategies
