use clap::ValueEnum;

/// Log levels accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Trace,
	Debug,
	Info,
	Warn,
	Error,
	Off,
}

impl LogLevelArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			LogLevelArg::Trace => "trace",
			LogLevelArg::Debug => "debug",
			LogLevelArg::Info => "info",
			LogLevelArg::Warn => "warn",
			LogLevelArg::Error => "error",
			LogLevelArg::Off => "off",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
