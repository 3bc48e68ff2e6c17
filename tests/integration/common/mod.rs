//! Common utilities for integration tests

use imgviz::sources::parse_images;
use imgviz::ImageNode;
use std::path::Path;

pub const FIXTURE: &str = "tests/integration/fixtures/images.json";

/// Truncated ids of the fixture images
#[allow(dead_code)]
pub const UBUNTU: &str = "511136ea3c5a";
#[allow(dead_code)]
pub const TOOLS: &str = "b1d2e3f4a5b6";
#[allow(dead_code)]
pub const HIDDEN_LOWER: &str = "9e0a1b2c3d4e";
#[allow(dead_code)]
pub const HIDDEN_UPPER: &str = "7f7d9bb1f55a";
#[allow(dead_code)]
pub const MYAPP: &str = "4c1b2ae1d3b2";
#[allow(dead_code)]
pub const BUSYBOX: &str = "c0ffee00c0ff";

pub fn fixture_images() -> Vec<ImageNode> {
    let raw = std::fs::read(Path::new(FIXTURE)).expect("fixture should be readable");
    parse_images(&raw).expect("fixture should parse")
}
