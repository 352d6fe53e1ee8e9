#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, info};

pub mod common;

pub mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("launching moonlight-site");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
