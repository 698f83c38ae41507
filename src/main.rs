fn main() {
    sequana_demultiplex::app::cli::run();
}
