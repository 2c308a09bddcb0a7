use {
  b58hex::cli,
  std::process::ExitCode,
  tracing_subscriber::EnvFilter,
};

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  match cli::run(std::env::args_os()) {
    Ok(output) => {
      println!("{output}");
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("{e}");
      ExitCode::from(e.exit_code())
    }
  }
}
