use std::process;

fn main() {
    if let Err(e) = fiftycal::cli::run() {
        e.eprint();
        process::exit(1);
    }
}
