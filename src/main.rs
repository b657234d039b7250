use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use dirlist::{app, cli::Args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse_lenient();

    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();
    match app::run(&args, &mut out, &mut diag) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = out.flush();
            let _ = writeln!(diag, "Error listing files: {err}");
            ExitCode::FAILURE
        }
    }
}
