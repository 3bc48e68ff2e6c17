//! Integration tests for imgviz
//!
//! This module contains integration tests that verify the image sources and the
//! rendering pipeline end to end.

pub mod common;
pub mod docker;
pub mod json;
pub mod nerdctl;
