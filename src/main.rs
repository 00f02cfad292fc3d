use coordinates::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::new().run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
