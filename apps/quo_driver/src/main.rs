fn main() {
    if let Err(e) = quo_driver::run_cli() {
        eprintln!("{e}");
        std::process::exit(quo_driver::exit_code(&e));
    }
}
