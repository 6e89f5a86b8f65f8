use pdfetch_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            tracing::debug!("{}", err);
            print!("{}", cli::usage());
            std::process::exit(1);
        }
    };

    std::process::exit(cli::run(&args));
}
