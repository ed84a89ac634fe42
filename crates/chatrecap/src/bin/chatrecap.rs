fn main() {
    if let Err(err) = chatrecap::run() {
        eprintln!("{}", chatrecap::format_error(&err));
        std::process::exit(1);
    }
}
