use super::load::read_column;
use anyhow::Result;
use clap::Args;
use polyarea::{AreaEngine, AreaOptions, ExecutionMode, Granularity, HoleExcess};
use std::{io::Write, path::PathBuf};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file with Polygon and MultiPolygon geometries
	#[arg(required = true, verbatim_doc_comment)]
	input_file: PathBuf,

	/// one area per polygon or per multipolygon
	#[arg(long, short, value_enum, default_value_t = Granularity::MultiPolygon)]
	granularity: Granularity,

	/// sum left to right on one thread, bit-reproducible
	#[arg(long)]
	deterministic: bool,

	/// report 0 instead of a negative area when holes exceed the outer ring
	#[arg(long)]
	clamp_holes: bool,

	/// accept rings whose first and last point differ by at most this much per axis
	#[arg(long, value_name = "DISTANCE", value_parser = parse_tolerance)]
	closure_tolerance: Option<f64>,

	/// number of worker threads (default: one per logical CPU)
	#[arg(long, short)]
	lanes: Option<usize>,
}

/// A tolerance must be a finite, non-negative distance.
fn parse_tolerance(value: &str) -> Result<f64, String> {
	let tolerance: f64 = value.parse().map_err(|e| format!("{e}"))?;
	if tolerance.is_finite() && tolerance >= 0.0 {
		Ok(tolerance)
	} else {
		Err(format!("{value} is not a finite, non-negative distance"))
	}
}

impl Subcommand {
	fn options(&self) -> AreaOptions {
		let mut options = AreaOptions::default().with_granularity(self.granularity);
		if self.deterministic {
			options = options.with_mode(ExecutionMode::Deterministic);
		}
		if self.clamp_holes {
			options = options.with_hole_excess(HoleExcess::Clamp);
		}
		if let Some(tolerance) = self.closure_tolerance {
			options = options.with_closure_tolerance(tolerance);
		}
		if let Some(lanes) = self.lanes {
			options = options.with_lanes(lanes);
		}
		options
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let column = read_column(&arguments.input_file)?;
	let output = AreaEngine::new(arguments.options()).compute(&column)?;
	log::info!(
		"{} areas, {} degenerate rings, {} negative polygons",
		output.areas.len(),
		output.diagnostics.degenerate_rings,
		output.diagnostics.negative_polygons
	);

	let mut stdout = std::io::stdout().lock();
	for area in output.areas {
		writeln!(stdout, "{area}")?;
	}
	Ok(())
}
