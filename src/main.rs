use env_logger::{Builder, Env};

fn main() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    if let Err(error) = stack_cropper::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
