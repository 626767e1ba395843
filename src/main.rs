use std::io::{self, Write};

use vidgen::{DEFAULT_PROGRAM_NAME, LauncherConfig, SystemRunner, failure_code, logging};

fn main() {
    logging::init();

    let mut args = std::env::args_os();
    let program = args
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());

    let mut stdout = io::stdout();
    let code = match vidgen::run(
        &program,
        args,
        LauncherConfig::from_env,
        &SystemRunner,
        &mut stdout,
    ) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            failure_code(&e)
        }
    };

    let _ = stdout.flush();
    std::process::exit(code);
}
