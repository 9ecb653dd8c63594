use philjs::prelude::*;

#[component]
fn C() -> View {
    view! {
        div
    }
}

fn compile_fail() {
    let _: View = view! { UnknownComponent() };

    let _: View = view! { C };
    let _: View = view! { C(1) };
}

fn main() {}
