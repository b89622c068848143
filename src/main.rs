fn main() {
    siteforge::app::cli::run();
}
