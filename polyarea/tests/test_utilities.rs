#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::io::Write;
use tempfile::NamedTempFile;

#[cfg(windows)]
pub const BINARY_NAME: &str = "polyarea.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "polyarea";

/// Helper to create a Command for the polyarea binary.
pub fn polyarea_cmd() -> Command {
	Command::new(cargo::cargo_bin!("polyarea"))
}

/// Helper to write GeoJSON into a temporary file that lives as long as the handle.
pub fn geojson_file(content: &str) -> NamedTempFile {
	let mut file = tempfile::Builder::new()
		.suffix(".geojson")
		.tempfile()
		.expect("failed to create temp file");
	file.write_all(content.as_bytes()).expect("failed to write temp file");
	file
}

/// A feature collection with a square with a hole, a point, and a multipolygon of a square and a triangle.
pub const MIXED: &str = r#"{"type":"FeatureCollection","features":[
	{"type":"Feature","properties":{},"geometry":{"type":"Polygon","coordinates":[
		[[0,0],[4,0],[4,4],[0,4],[0,0]],
		[[1,1],[3,1],[3,3],[1,3],[1,1]]
	]}},
	{"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[1,1]}},
	{"type":"Feature","properties":{},"geometry":{"type":"MultiPolygon","coordinates":[
		[[[0,0],[4,0],[4,4],[0,4],[0,0]]],
		[[[0,0],[4,0],[0,3],[0,0]]]
	]}}
]}"#;
