use std::iter::once;

use super::*;

#[wasm_bindgen_test]
fn append() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();

        assert_eq!(p.text_content().unwrap(), "12");

        count.update(|v| v.push(3));
        assert_eq!(p.text_content().unwrap(), "123");

        count.set(count.get_clone().into_iter().skip(1).collect());
        assert_eq!(p.text_content().unwrap(), "23");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn swap_rows() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2, 3]);

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "123");

        count.update(|v| v.swap(0, 2));
        assert_eq!(p.text_content().unwrap(), "321");

        count.update(|v| v.swap(0, 2));
        assert_eq!(p.text_content().unwrap(), "123");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn update_row() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "12");

        count.set(vec![1, 3]);
        assert_eq!(p.text_content().unwrap(), "13");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn trigger_with_same_data() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "12");

        count.set(count.get_clone());
        assert_eq!(p.text_content().unwrap(), "12");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn delete_row() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2, 3]);

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "123");

        count.update(|v| {
            v.remove(1);
        });
        assert_eq!(p.text_content().unwrap(), "13");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn delete_row_from_start() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "12");

        count.set(count.get_clone().into_iter().skip(1).collect());
        assert_eq!(p.text_content().unwrap(), "2");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn delete_row_from_end() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "12");

        count.set(count.get_clone().into_iter().take(1).collect());
        assert_eq!(p.text_content().unwrap(), "1");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn clear() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2, 3]);

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "123");

        count.set(Vec::new());
        assert_eq!(p.text_content().unwrap(), "");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn insert_front() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2, 3]);

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "123");

        count.update(|v| v.insert(0, 4));
        assert_eq!(p.text_content().unwrap(), "4123");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn nested_reactivity() {
    let root = create_root(|| {
        let count = create_signal(
            vec![1, 2, 3]
                .into_iter()
                .map(create_signal)
                .collect::<Vec<_>>(),
        );

        let node = view! {
            ul {
                Indexed(
                    list=count,
                    view=|item| view! {
                        li { (item.get()) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("ul").unwrap().unwrap();
        assert_eq!(p.text_content().unwrap(), "123");

        count.get_clone()[0].set(4);
        assert_eq!(p.text_content().unwrap(), "423");

        count.update(|v| v.push(create_signal(5)));
        assert_eq!(p.text_content().unwrap(), "4235");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn fragment_template() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            div {
                Indexed(
                    list=count,
                    view=|item| view! {
                        span { "The value is: " }
                        strong { (item) }
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document().query_selector("div").unwrap().unwrap();

        assert_eq!(
            p.text_content().unwrap(),
            "\
    The value is: 1\
    The value is: 2"
        );

        count.update(|v| v.push(3));
        assert_eq!(
            p.text_content().unwrap(),
            "\
    The value is: 1\
    The value is: 2\
    The value is: 3"
        );

        count.set(count.get_clone().into_iter().skip(1).collect());
        assert_eq!(
            p.text_content().unwrap(),
            "\
    The value is: 2\
    The value is: 3"
        );
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn template_top_level() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            Indexed(
                list=count,
                view=|item| view! {
                    li { (item) }
                },
            )
        };

        philjs::render_to(move || node, &test_container());

        let p = document()
            .query_selector("#test-container")
            .unwrap()
            .unwrap();

        assert_eq!(p.text_content().unwrap(), "12");

        count.update(|v| v.push(3));
        assert_eq!(p.text_content().unwrap(), "123");

        count.set(count.get_clone().into_iter().skip(1).collect());
        assert_eq!(p.text_content().unwrap(), "23");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn template_dyn_top_level() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            div {
                Indexed(
                    list=count,
                    view=|item| view! {
                        (item)
                    },
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = document()
            .query_selector("#test-container")
            .unwrap()
            .unwrap();

        assert_eq!(p.text_content().unwrap(), "12");

        count.update(|v| v.push(3));
        assert_eq!(p.text_content().unwrap(), "123");

        count.set(count.get_clone().into_iter().skip(1).collect());
        assert_eq!(p.text_content().unwrap(), "23");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn template_with_other_nodes_at_same_level() {
    let root = create_root(|| {
        let vec1 = create_signal(vec![1, 2]);
        let vec2 = create_signal(vec![4, 5]);

        let node = view! {
            ul {
                li { "before" }
                Indexed(
                    list=vec1,
                    view=|item| view! {
                        li { (item) }
                    },
                )
                Indexed(
                    list=vec2,
                    view=|item| view! {
                        li { (item) }
                    },
                )
                li { "after" }
            }
        };

        philjs::render_to(move || node, &test_container());

        let elem = document().query_selector("ul").unwrap().unwrap();

        assert_eq!(elem.text_content().unwrap(), "before1245after");

        vec1.update(|v| v.extend(once(3)));
        assert_eq!(elem.text_content().unwrap(), "before12345after");

        vec1.set(Vec::new());
        assert_eq!(elem.text_content().unwrap(), "before45after");

        vec1.set(vec![1]);
        assert_eq!(elem.text_content().unwrap(), "before145after");
    });
    root.dispose();
}
