use super::load::read_column;
use anyhow::Result;
use clap::Args;
use polyarea::{AreaEngine, AreaOptions, Granularity};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file you want to probe
	#[arg(required = true, verbatim_doc_comment)]
	input_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("probe {:?}", arguments.input_file);

	let column = read_column(&arguments.input_file)?;
	println!("multipolygons: {}", column.num_multipolygons());
	println!("polygons: {}", column.num_polygons());
	println!("rings: {}", column.num_rings());
	println!("points: {}", column.num_points());

	let options = AreaOptions::default().with_granularity(Granularity::Polygon);
	match AreaEngine::new(options).compute(&column) {
		Ok(output) => {
			let diagnostics = output.diagnostics;
			println!("valid: yes");
			println!("degenerate rings: {}", diagnostics.degenerate_rings);
			println!("negative polygons: {}", diagnostics.negative_polygons);
			println!("split rings: {}", diagnostics.split_rings);
			println!("total area: {}", output.areas.iter().sum::<f64>());
		}
		Err(err) => println!("valid: no ({err})"),
	}
	Ok(())
}
