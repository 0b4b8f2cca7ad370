use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use phonetrack::{CountryRegistry, MetadataProvider, NumberLookupService};

pub mod completions;
pub mod interactive;
pub mod lookup;

pub use completions::CompletionsCommand;
pub use interactive::InteractiveCommand;
pub use lookup::LookupCommand;

/// A command that does not look anything up.
pub(crate) trait ConstCommand {
	fn execute(&self) -> anyhow::Result<()>;
}

/// A command that looks up phone numbers.
pub(crate) trait ServiceCommand<P, R>
where
	P: MetadataProvider,
	R: CountryRegistry,
{
	fn execute(
		&self,
		service: &NumberLookupService<P, R>,
		args: &GlobalArgs,
	) -> anyhow::Result<()>;
}

pub(crate) enum CommandType<P, R>
where
	P: MetadataProvider,
	R: CountryRegistry,
{
	Const(Box<dyn ConstCommand>),
	Service(Box<dyn ServiceCommand<P, R>>),
}

#[derive(Debug, Clone, Parser)]
#[clap(name="phonetrack-cli", bin_name="phonetrack", author, version, about = "Look up the country, region, carrier and line type of phone numbers.", long_about = None)]
pub(crate) struct Args {
	#[clap(flatten)]
	pub global: GlobalArgs,

	#[clap(subcommand)]
	pub sub: Option<Subcommands>,

	#[clap(flatten)]
	pub lookup: LookupCommand,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct GlobalArgs {
	#[clap(
		short,
		long,
		global = true,
		env = "PHONETRACK_DATA_DIR",
		help = "Directory with extra geocoding and carrier tables.",
		long_help = "Directory with extra geocoding and carrier tables. Tables are read from geocoding/<locale>.json and carrier/<locale>.json, each a JSON object mapping E.164 digit prefixes to names. Entries override the bundled data."
	)]
	pub data_dir: Option<String>,
	#[clap(short, long, global = true, value_enum, default_value_t=OutputFormat::Text, help = "How to print results.")]
	pub format: OutputFormat,
	#[clap(short, long, global = true, value_enum, default_value_t=Verbosity::Info, help = "Set the log level. Be warned, trace prints every number that is looked up.")]
	pub verbosity: Verbosity,
}

#[derive(Debug, Clone, Parser)]
pub(crate) enum Subcommands {
	Lookup(LookupCommand),
	Interactive(InteractiveCommand),
	Completion(CompletionsCommand),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Verbosity {
	Error = 0,
	Warn = 1,
	Info = 2,
	Debug = 3,
	Trace = 4,
}

impl std::fmt::Display for Verbosity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!(
			"{}",
			match self {
				Verbosity::Error => "error",
				Verbosity::Warn => "warn",
				Verbosity::Info => "info",
				Verbosity::Debug => "debug",
				Verbosity::Trace => "trace",
			}
		))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// Labelled lines, coloured when printing to a terminal.
	Text,
	/// One JSON object per number.
	Json,
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			OutputFormat::Text => "text",
			OutputFormat::Json => "json",
		})
	}
}

// HACK: the derive API doesn't support default subcommands, so numbers given without a subcommand are routed to `lookup` this way.
// See: https://github.com/clap-rs/clap/issues/3857
impl From<Args> for LookupCommand {
	fn from(args: Args) -> Self {
		args.lookup
	}
}
