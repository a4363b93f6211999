fn main() {
    if let Err(err) = kpi_radar::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
