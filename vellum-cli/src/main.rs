use clap::Command;

mod cmd;
mod config;

fn main() {
    let app = Command::new("vellum")
        .about("Turn a folder of markdown posts into a tiny static site")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::build::make_subcommand());

    let matches = app.get_matches();
    let result = match matches.subcommand() {
        Some(("build", args)) => cmd::build::execute(args),
        _ => unreachable!(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
