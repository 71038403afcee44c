//! CSR entry point: install panic/log hooks and mount the app.

use free_dispatcher_ui::app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
