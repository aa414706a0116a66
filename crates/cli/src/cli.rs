use clap::{Args, Parser, Subcommand, ValueEnum};
use gridalign::{HorizontalAlignment, Rect, VerticalAlignment};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "gridalign")]
#[command(about = "Align rectangles and text inside cell bounds")]
#[command(version)]
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Align an area inside bounds, printing the aligned rectangle
	Rect {
		/// Bounding rectangle as X0,Y0,X1,Y1
		#[arg(long, short = 'b', allow_hyphen_values = true)]
		bounds: Rect,

		/// Area to align as X0,Y0,X1,Y1; must lie within the bounds
		#[arg(long, short = 'a', allow_hyphen_values = true)]
		area: Rect,

		/// Alignment directives.
		#[command(flatten)]
		align: AlignArgs,

		/// Output format
		#[arg(long, short = 'f', value_enum, default_value_t = Format::Plain)]
		format: Format,
	},
	/// Align a single line of text inside bounds, printing where it starts
	Text {
		/// Bounding rectangle as X0,Y0,X1,Y1
		#[arg(long, short = 'b', allow_hyphen_values = true)]
		bounds: Rect,

		/// Text to align
		text: String,

		/// Alignment directives.
		#[command(flatten)]
		align: AlignArgs,

		/// Output format
		#[arg(long, short = 'f', value_enum, default_value_t = Format::Plain)]
		format: Format,
	},
}

/// Horizontal and vertical alignment flags shared by every subcommand.
#[derive(Args, Debug, Clone, Copy)]
pub struct AlignArgs {
	/// Horizontal alignment: left, center or right
	#[arg(long, short = 'H', default_value = "left")]
	pub horizontal: HorizontalAlignment,

	/// Vertical alignment: top, middle or bottom
	#[arg(long, short = 'V', default_value = "top")]
	pub vertical: VerticalAlignment,
}

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
	/// Comma separated coordinates
	#[default]
	Plain,
	/// JSON object
	Json,
}
