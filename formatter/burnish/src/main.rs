use burnish::{cli, files, init_tracing};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::parse(&args) {
        Ok(cli::Command::Help) => cli::print_help(),
        Ok(cli::Command::Run(config)) => {
            init_tracing(config.debug);

            if !files::run(&config) {
                std::process::exit(1);
            }
        }
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run 'burnish --help' for usage");
            std::process::exit(1);
        }
    }
}
