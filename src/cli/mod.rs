pub mod answers;
pub mod args;
pub mod materialize;
pub mod processor;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, parse_cli, Cli, Commands, CreateArgs, MaterializeArgs,
};
pub use runner::run;
