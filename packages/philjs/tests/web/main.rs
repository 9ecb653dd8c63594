pub mod cleanup;
pub mod indexed;
pub mod keyed;
pub mod portal;
pub mod render;
pub mod svg;
pub mod utils;

use philjs::prelude::*;
use philjs::web::tags;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, Node, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

/// Returns a [`Element`] referencing the test container with the contents cleared.
fn test_container() -> Element {
    if document()
        .query_selector("test-container#test-container")
        .unwrap()
        .is_none()
    {
        document()
            .body()
            .unwrap()
            .insert_adjacent_html(
                "beforeend",
                r#"<test-container id="test-container"></test-container>"#,
            )
            .unwrap();
    }

    let container = document()
        .query_selector("test-container#test-container")
        .unwrap()
        .unwrap();

    container.set_inner_html(""); // erase contents from previous test runs

    container
}

#[wasm_bindgen_test]
fn empty_view() {
    philjs::render_to(|| View::empty(), &test_container());
    assert_eq!(
        document()
            .query_selector("#test-container")
            .unwrap()
            .unwrap()
            .inner_html(),
        "<!---->"
    );
}

#[wasm_bindgen_test]
fn hello_world() {
    philjs::render_to(
        || {
            view! {
                p { "Hello World!" }
            }
        },
        &test_container(),
    );
    assert_eq!(
        &document()
            .query_selector("p")
            .unwrap()
            .unwrap()
            .outer_html(),
        "<p>Hello World!</p>"
    );
}

#[wasm_bindgen_test]
fn hello_world_noderef() {
    let p_ref = NodeRef::new();

    philjs::render_to(
        move || View::from(tags::p().r#ref(p_ref).children("Hello World!")),
        &test_container(),
    );

    assert_eq!(
        p_ref.get().unchecked_into::<HtmlElement>().outer_html(),
        "<p>Hello World!</p>"
    );
}

#[wasm_bindgen_test]
fn interpolation() {
    let text = "Hello PhilJS!";
    philjs::render_to(
        move || {
            view! {
                p { (text) }
            }
        },
        &test_container(),
    );

    assert_eq!(
        document()
            .query_selector("p")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap(),
        "Hello PhilJS!"
    );
}

#[wasm_bindgen_test]
fn view_interpolation() {
    philjs::render_to(
        || {
            let text = view! { "Hello PhilJS!" };
            view! {
                p {
                    (text)
                }
            }
        },
        &test_container(),
    );
    assert_eq!(
        document()
            .query_selector("p")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap(),
        "Hello PhilJS!"
    );
}

#[wasm_bindgen_test]
fn view_interpolation_if_else() {
    let root = create_root(|| {
        let show = create_signal(true);
        let node = view! {
            p {
                (if show.get() {
                    view! { "Hello PhilJS!" }
                } else {
                    view! {}
                })
            }
        };
        philjs::render_to(move || node, &test_container());
        assert_eq!(
            document()
                .query_selector("p")
                .unwrap()
                .unwrap()
                .text_content()
                .unwrap(),
            "Hello PhilJS!"
        );

        show.set(false);
        assert_eq!(
            document()
                .query_selector("p")
                .unwrap()
                .unwrap()
                .text_content()
                .unwrap(),
            ""
        );

        show.set(true);
        assert_eq!(
            document()
                .query_selector("p")
                .unwrap()
                .unwrap()
                .text_content()
                .unwrap(),
            "Hello PhilJS!"
        );
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn view_interpolation_if_else_with_sibling() {
    let root = create_root(|| {
        let show = create_signal(true);
        let node = view! {
            div { "Before" }
            (if show.get() {
                view! { p { "Hello PhilJS!" } }
            } else {
                view! { p { "" } }
            })
        };
        philjs::render_to(move || node, &test_container());
        assert_eq!(
            document()
                .query_selector("p")
                .unwrap()
                .unwrap()
                .text_content()
                .unwrap(),
            "Hello PhilJS!"
        );

        show.set(false);
        assert_eq!(
            document()
                .query_selector("p")
                .unwrap()
                .unwrap()
                .text_content()
                .unwrap(),
            ""
        );

        show.set(true);
        assert_eq!(
            document()
                .query_selector("p")
                .unwrap()
                .unwrap()
                .text_content()
                .unwrap(),
            "Hello PhilJS!"
        );
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn view_interpolation_nested_reactivity() {
    let root = create_root(|| {
        let count = create_signal(0);
        let text = view! { p { (count.get()) } };
        let node = view! {
            p {
                (text)
            }
        };

        philjs::render_to(move || node, &test_container());
        let p = document().query_selector("p").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "0");

        count.set(1);
        assert_eq!(p.text_content().unwrap(), "1");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn reactive_text() {
    let root = create_root(|| {
        let count = create_signal(0);

        let node = view! {
            p { (count.get()) }
        };

        philjs::render_to(move || node, &test_container());
        let p = document().query_selector("p").unwrap().unwrap();

        assert_eq!(p.text_content().unwrap(), "0");

        count.set(1);
        assert_eq!(p.text_content().unwrap(), "1");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn reactive_text_do_not_destroy_previous_children() {
    let root = create_root(|| {
        let count = create_signal(0);

        let node = view! {
            p { "Value: " (count.get()) }
        };

        philjs::render_to(move || node, &test_container());
        let p = document().query_selector("p").unwrap().unwrap();

        assert_eq!(p.text_content().unwrap(), "Value: 0");

        count.set(1);
        assert_eq!(p.text_content().unwrap(), "Value: 1");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn reactive_attribute() {
    let root = create_root(|| {
        let count = create_signal(0);

        let node = view! {
            span(data-count=count.get().to_string())
        };

        philjs::render_to(move || node, &test_container());
        let span = document().query_selector("span").unwrap().unwrap();

        assert_eq!(span.get_attribute("data-count").unwrap(), "0");

        count.set(1);
        assert_eq!(span.get_attribute("data-count").unwrap(), "1");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn two_way_bind_to_props() {
    let root = create_root(|| {
        let value = create_signal(String::new());

        philjs::render_to(
            move || {
                view! {
                    input(bind:value=value)
                    p { (value.get_clone()) }
                }
            },
            &test_container(),
        );

        let input = document()
            .query_selector("input")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlInputElement>();

        value.set("abc".to_string());
        assert_eq!(
            js_sys::Reflect::get(&input, &"value".into()).unwrap(),
            "abc"
        );

        js_sys::Reflect::set(&input, &"value".into(), &"def".into()).unwrap();
        input
            .dispatch_event(&web_sys::Event::new("input").unwrap())
            .unwrap();
        assert_eq!(value.get_clone().as_str(), "def");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn noderefs() {
    let root = create_root(|| {
        let noderef = create_node_ref();
        let node = View::from(tags::div().children(tags::input().r#ref(noderef)));

        philjs::render_to(move || node, &test_container());
        let input_ref = document().query_selector("input").unwrap().unwrap();

        assert_eq!(Node::from(input_ref), noderef.get());
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn fragments() {
    let root = create_root(|| {
        let node = view! {
            p { "1" }
            p { "2" }
            p { "3" }
        };
        philjs::render_to(move || node, &test_container());
        let test_container = document()
            .query_selector("#test-container")
            .unwrap()
            .unwrap();

        assert_eq!(test_container.text_content().unwrap(), "123");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn fragments_text_nodes() {
    let root = create_root(|| {
        let node = view! {
            "1"
            "2"
            "3"
        };

        philjs::render_to(move || node, &test_container());
        let test_container = document()
            .query_selector("#test-container")
            .unwrap()
            .unwrap();

        assert_eq!(test_container.text_content().unwrap(), "123");
    });
    root.dispose();
}
