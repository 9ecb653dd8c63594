use super::*;

#[wasm_bindgen_test]
fn dyn_view_static() {
    let root = create_root(|| {
        let node: View = View::from_dynamic(move || {
            view! {
                div {
                    "Test"
                }
            }
        });

        philjs::render_to(move || node, &test_container());
        assert_eq!(query("div").text_content().unwrap(), "Test");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn dyn_view() {
    let root = create_root(|| {
        let template = create_signal(view! { "1" });
        let node: View = View::from_dynamic(move || template.get_clone());

        philjs::render_to(move || node, &test_container());
        let test_container = query("test-container");

        assert_eq!(test_container.text_content().unwrap(), "1");

        template.set(view! { "2" });
        assert_eq!(test_container.text_content().unwrap(), "2");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn dyn_fragment() {
    let root = create_root(|| {
        let num = create_signal(0);

        let node = view! {
            "before"
            p { (num.get()) }
            "after"
        };

        philjs::render_to(move || node, &test_container());
        let test_container = query("test-container");

        assert_eq!(test_container.text_content().unwrap(), "before0after");

        num.set(1);

        assert_eq!(test_container.text_content().unwrap(), "before1after");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn dyn_nested() {
    let root = create_root(|| {
        let node: View = View::from_dynamic(move || {
            View::from_dynamic(move || {
                view! {
                    div {
                        "Test"
                    }
                }
            })
        });

        philjs::render_to(move || node, &test_container());
        assert_eq!(query("div").text_content().unwrap(), "Test");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn dyn_scoped_nested() {
    let root = create_root(|| {
        let num = create_signal(0);

        let node: View = View::from_dynamic(move || {
            View::from_dynamic(move || {
                view! {
                    div {
                        (num.get())
                    }
                }
            })
        });

        philjs::render_to(move || node, &test_container());
        assert_eq!(query("div").text_content().unwrap(), "0");
        num.set(1);
        assert_eq!(query("div").text_content().unwrap(), "1");
    });
    root.dispose();
}
