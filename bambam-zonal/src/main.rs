use bambam_zonal::app::{self, ZonalRunArguments};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ZonalAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// aggregate zone populations by travel time to or from a reachability search origin
    Run(ZonalRunArguments),
}

fn main() {
    env_logger::init();
    let args = ZonalAppArguments::parse();
    let result = match &args.app {
        App::Run(run_args) => app::run(run_args),
    };
    match result {
        Ok(_) => eprintln!("finished."),
        Err(e) => {
            log::error!("bambam-zonal failed: {e}");
            std::process::exit(1);
        }
    }
}
