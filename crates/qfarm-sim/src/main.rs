//! `qfarm-sim` binary entry point

fn main() {
    qfarm_sim::init_tracing();

    let matches = qfarm_sim::build_cli().get_matches();
    let stdout = std::io::stdout();

    if let Err(e) = qfarm_sim::run(&matches, &mut stdout.lock()) {
        tracing::error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
