use dioxus::prelude::*;

use ui::Dashboard;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    rsx! {
        Dashboard {}
    }
}
