use std::io;

fn main() {
    headsup_cli::logging::init_logging();
    let code = headsup_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
