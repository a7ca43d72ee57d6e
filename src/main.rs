#![allow(warnings)]
//! Widget Frontend Entry Point

mod app;
mod audio;
mod claw;
mod commands;
mod components;
mod context;
mod intent;
mod models;
mod store;
mod tasks;
mod voice;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
