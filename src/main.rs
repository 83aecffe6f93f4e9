fn main() {
    std::process::exit(helpqueue::app::startup::startup());
}
