use philjs::prelude::*;

#[component]
pub fn Component() -> View {
    view! {
        div
    }
}

fn compile_pass() {
    let _: View = view! { Component() };
}

fn main() {}
