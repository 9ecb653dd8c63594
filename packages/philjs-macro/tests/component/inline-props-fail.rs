use philjs::prelude::*;

#[component(not_inline_props)]
fn NotInlineProps() -> View {
    view! {}
}

fn main() {}
