fn main() {
    if let Err(err) = rustat::run() {
        eprintln!("{}", rustat::format_error(&err));
        std::process::exit(1);
    }
}
