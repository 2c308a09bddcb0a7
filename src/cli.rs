use {
  crate::codec::{self, InvalidInput},
  clap::{Parser, Subcommand},
  std::{ffi::OsString, path::Path},
  thiserror::Error,
  tracing::debug,
};

#[derive(Debug, Parser)]
#[clap(
  about,
  disable_help_flag = true,
  disable_version_flag = true,
  disable_help_subcommand = true
)]
pub struct CliOpts {
  #[clap(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  #[clap(name = "hex2b58", about = "Encode a hex string as base58")]
  HexToBase58 {
    #[clap(
      value_name = "hex|0xhex",
      help = "hex bytes, optionally prefixed with 0x"
    )]
    hex: String,
  },

  #[clap(name = "b582hex", about = "Decode a base58 string into hex")]
  Base58ToHex {
    #[clap(
      value_name = "base58",
      help = "base58 string in the bitcoin alphabet"
    )]
    base58: String,
  },
}

impl Command {
  /// Runs the conversion selected on the command line.
  pub fn execute(&self) -> Result<String, InvalidInput> {
    match self {
      Command::HexToBase58 { hex } => codec::hex_to_base58(hex),
      Command::Base58ToHex { base58 } => codec::base58_to_hex(base58),
    }
  }
}

#[derive(Debug, Error)]
pub enum CliError {
  /// Wrong argument count or unknown subcommand.
  #[error("{0}")]
  Usage(String),

  #[error("error: {0}")]
  Input(#[from] InvalidInput),
}

impl CliError {
  /// Process exit code for this failure. Scripts rely on
  /// usage errors and bad input being distinguishable.
  pub fn exit_code(&self) -> u8 {
    match self {
      CliError::Usage(_) => 1,
      CliError::Input(_) => 2,
    }
  }
}

/// Usage banner for the given program name.
pub fn usage(prog: &str) -> String {
  format!(
    "Usage:\n  {prog} hex2b58 <hex|0xhex>\n  {prog} b582hex <base58>"
  )
}

/// Parses the full argument list (including the program name)
/// and returns the converted value on success.
///
/// Exactly a subcommand and one value are accepted. The value is
/// never interpreted as a flag, so `-h` or `--` reach the codec
/// and fail validation like any other malformed input.
pub fn run<I, T>(args: I) -> Result<String, CliError>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString>,
{
  let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
  let prog = program_name(&args);

  let escaped = match args.as_slice() {
    [arg0, command, value] => {
      [arg0.clone(), command.clone(), "--".into(), value.clone()]
    }
    _ => {
      debug!("expected 2 arguments, got {}", args.len().saturating_sub(1));
      return Err(CliError::Usage(usage(&prog)));
    }
  };

  let opts = CliOpts::try_parse_from(escaped).map_err(|e| {
    debug!("rejected command line: {:?}", e.kind());
    CliError::Usage(usage(&prog))
  })?;

  debug!("running {:?}", opts.command);
  opts.command.execute().map_err(|e| {
    debug!("input validation failed: {e}");
    CliError::Input(e)
  })
}

fn program_name(args: &[OsString]) -> String {
  args
    .first()
    .and_then(|arg0| Path::new(arg0).file_name())
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}
