use dioxus::prelude::*;
use ui::views::DashboardView;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        DashboardView {}
    }
}
