use std::io;

fn main() {
    tongits_cli::logging::init_logging();
    let code = tongits_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
