use clap::Parser;
use collection_export::cli::{run, Args};
use collection_export::output::format_summary;

fn main() {
    let args = Args::parse();

    // Set RUST_LOG to override, e.g. RUST_LOG=collection_export=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match run(&args) {
        Ok(outcome) => {
            println!(
                "{}",
                format_summary(
                    outcome.report.records.len(),
                    &outcome.output_path,
                    outcome.report.total_value
                )
            );
        }
        Err(e) => {
            log::error!("Export failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
