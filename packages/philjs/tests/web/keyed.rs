use std::iter::once;

use super::*;
use super::utils::{assert_text_content, query};

#[wasm_bindgen_test]
fn append() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "12");

        count.update(|v| v.push(3));
        assert_text_content!(p, "123");

        count.update(|v| v.remove(0));
        assert_text_content!(p, "23");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn swap_rows() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2, 3]);

        let node = view! {
            ul {
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "123");

        count.update(|v| v.swap(0, 2));
        assert_text_content!(p, "321");

        count.update(|v| v.swap(0, 2));
        assert_text_content!(p, "123");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn update_row() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "12");

        count.set(vec![1, 3]);
        assert_text_content!(p, "13");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn trigger_with_same_data() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "12");

        count.set(count.get_clone());
        assert_text_content!(p, "12");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn delete_row() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2, 3]);

        let node = view! {
            ul {
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "123");

        count.update(|v| {
            v.remove(1);
        });
        assert_text_content!(p, "13");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn delete_row_from_start() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "12");

        count.set(count.get_clone().into_iter().skip(1).collect());
        assert_text_content!(p, "2");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn delete_row_from_end() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            ul {
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "12");

        count.set(count.get_clone().into_iter().take(1).collect());
        assert_text_content!(p, "1");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn clear() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2, 3]);

        let node = view! {
            ul {
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "123");

        count.set(Vec::new());
        assert_text_content!(p, "");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn insert_front() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2, 3]);

        let node = view! {
            ul {
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "123");

        count.update(|v| v.insert(0, 4));
        assert_text_content!(p, "4123");
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
                Keyed(
                    list=count,
                    view=|item| view! {
                        li { (item.get()) }
                    },
                    key=|item| item.get(),
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("ul");
        assert_text_content!(p, "123");

        count.get_clone()[0].set(4);
        assert_text_content!(p, "423");

        count.update(|v| v.push(create_signal(5)));
        assert_text_content!(p, "4235");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn fragment_template() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            div {
                Keyed(
                    list=count,
                    view=|item| view! {
                        span { "The value is: " }
                        strong { (item) }
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("div");

        assert_text_content!(
            p,
            "\
    The value is: 1\
    The value is: 2"
        );

        count.update(|v| v.push(3));
        assert_text_content!(
            p,
            "\
    The value is: 1\
    The value is: 2\
    The value is: 3"
        );

        count.update(|v| {
            v.remove(0);
        });
        assert_text_content!(
            p,
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
            Keyed(
                list=count,
                view=|item| view! {
                    li { (item) }
                },
                key=|item| *item,
            )
        };

        philjs::render_to(move || node, &test_container());

        let p = query("#test-container");

        assert_text_content!(p, "12");

        count.update(|v| v.push(3));
        assert_text_content!(p, "123");

        count.update(|v| {
            v.remove(0);
        });
        assert_text_content!(p, "23");
    });
    root.dispose();
}

#[wasm_bindgen_test]
fn template_dyn_top_level() {
    let root = create_root(|| {
        let count = create_signal(vec![1, 2]);

        let node = view! {
            div {
                Keyed(
                    list=count,
                    view=|item| view! {
                        (item)
                    },
                    key=|item| *item,
                )
            }
        };

        philjs::render_to(move || node, &test_container());

        let p = query("#test-container");

        assert_text_content!(p, "12");

        count.update(|v| v.push(3));
        assert_text_content!(p, "123");

        count.update(|v| {
            v.remove(0);
        });
        assert_text_content!(p, "23");
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
                Keyed(
                    list=vec1,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|x| *x,
                )
                Keyed(
                    list=vec2,
                    view=|item| view! {
                        li { (item) }
                    },
                    key=|x| *x,
                )
                li { "after" }
            }
        };

        philjs::render_to(move || node, &test_container());

        let elem = query("ul");

        assert_text_content!(elem, "before1245after");

        vec1.update(|v| v.extend(once(3)));
        assert_text_content!(elem, "before12345after");

        vec1.set(Vec::new());
        assert_text_content!(elem, "before45after");

        vec1.set(vec![1]);
        assert_text_content!(elem, "before145after");
    });
    root.dispose();
}
