use philjs::prelude::*;

/// Missing return type.
#[component]
fn comp1() {
    todo!();
}

/// `const fn` can't be a component.
#[component]
const fn comp2() -> View {
    todo!();
}

/// `extern fn` can't be a component.
#[component]
extern "C" fn comp3() -> View {
    todo!();
}

/// Components can't take a receiver.
struct S;
impl S {
    #[component]
    fn comp4(self) -> View {
        todo!();
    }
}

/// Components can't take more than one parameter.
#[component]
fn comp5(one: (), two: ()) -> View {
    todo!();
}

/// Taking a unit tuple as props is useless.
#[component]
fn comp6(_props: ()) -> View {
    todo!();
}

/// The `component` attribute can only be applied to functions.
#[component]
struct AStruct;

fn main() {}
