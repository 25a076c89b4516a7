use log::{Level, info};

use chale66::app::App;

fn main() {
    // Better panic messages and structured console logging before
    // anything else touches the DOM.
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("mounting Chalé 66");
    leptos::mount::mount_to_body(App);
}
