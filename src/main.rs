mod app;
mod audio;
mod config;
mod error;
mod library;
mod runtime;
mod sync;
mod track;
mod transport;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
