use stencil::{
    cli::{get_log_level_from_verbose, materialize, parse_cli, run, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();

    let lvl = get_log_level_from_verbose(cli.command.verbose());
    env_logger::Builder::new().filter_level(lvl).init();

    let result = match cli.command {
        Commands::Create(args) => run(args),
        Commands::Materialize(args) => materialize::run(args),
    };

    if let Err(err) = result {
        default_error_handler(err);
    }
}
