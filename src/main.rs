mod components;
mod config;
mod model;
mod state;
mod util;
mod wallet;

use components::app::{App, AppProps};
use config::AppConfig;

fn main() {
    let config = AppConfig::load();
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
