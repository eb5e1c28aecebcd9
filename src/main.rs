mod app;
mod components;
mod config;
mod error;
mod filter;
mod format;
mod hooks;
mod import;
mod models;
mod reports;
mod services;
mod storage;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
