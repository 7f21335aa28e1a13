mod app;
mod effects;
mod logging;
mod persistence;
mod profile;
mod render;

fn main() {
    logging::initialize(logging::LogDestination::File);
    app::run();
}
