use std::process;

use clap::{CommandFactory, Parser};
use cli::Cli;
use towasm::Dispatcher;

mod cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    if let Err(err) = run(Cli::parse()) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    // too few arguments is a request for help, not an error
    let Some(job) = args.job() else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    let outcome = Dispatcher::new(args.settings()).dispatch(&job)?;
    log::debug!("{} finished", outcome.toolchain);

    println!(
        "Compiled '{}' to WebAssembly binary '{}' successfully.",
        job.source.display(),
        job.output.display()
    );

    Ok(())
}
