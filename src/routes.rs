use dioxus::prelude::*;
use crate::views::{ Home, Navbar, PageNotFound };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[end_layout]
    #[route("/:..segments")] PageNotFound {
        segments: Vec<String>,
    },
}
