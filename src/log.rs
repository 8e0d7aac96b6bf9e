use env_logger::Builder;
use std::io::Write;

/// Logger whose lines are DIMACS comments, so they can be interleaved with
/// the solver output on stdout. The level is taken from `RUST_LOG`.
pub fn build_logger() {
    let mut builder = Builder::from_default_env();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "c {} {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
