use philjs::prelude::*;
use philjs::web::tags::*;
use philjs::web::NoHydrate;

#[test]
fn hello_world() {
    let actual = philjs::render_to_string(|| {
        view! {
            p { "Hello World!" }
        }
    });
    assert_eq!(actual, r#"<p data-hk=0>Hello World!</p>"#);
}

#[test]
fn render_escaped_text() {
    let actual = philjs::render_to_string(|| view! { "<script>alert('xss')</script>" });
    assert_eq!(actual, "&lt;script&gt;alert('xss')&lt;/script&gt;");
}

#[test]
fn self_closing_tag() {
    let actual = philjs::render_to_string(|| {
        view! {
            div {
                input {}
                input(value="a")
            }
        }
    });
    assert_eq!(
        actual,
        r#"<div data-hk=0><input data-hk=1><input value="a" data-hk=2></div>"#
    );
}

#[test]
fn fragments() {
    let actual = philjs::render_to_string(|| {
        view! {
            p { "1" }
            p { "2" }
            p { "3" }
        }
    });
    assert_eq!(
        actual,
        "<p data-hk=0>1</p><p data-hk=1>2</p><p data-hk=2>3</p>"
    );
}

#[test]
fn indexed() {
    let actual = philjs::render_to_string(|| {
        view! {
            ul {
                Indexed(
                    list=vec![1, 2],
                    view=|item| view! { li { (item) } },
                )
            }
        }
    });
    assert_eq!(
        actual,
        "<ul data-hk=0><li data-hk=1>1</li><li data-hk=2>2</li></ul>"
    );
}

#[test]
fn bind_value_is_not_rendered_in_ssr() {
    // `bind:value` attaches a JS property, which is a no-op in SSR mode.
    let actual = philjs::render_to_string(|| {
        let value = create_signal(String::new());
        view! {
            input(bind:value=value)
        }
    });
    assert_eq!(actual, "<input data-hk=0>");
}

#[test]
fn svg_element() {
    let actual = philjs::render_to_string(|| {
        view! {
            svg(xmlns="http://www.w3.org/2000/svg") {
                rect()
            }
        }
    });
    assert_eq!(
        actual,
        r#"<svg xmlns="http://www.w3.org/2000/svg" data-hk=0><rect data-hk=1></rect></svg>"#
    );
}

#[test]
fn no_hydrate_children_are_not_assigned_hydration_keys() {
    let actual = philjs::render_to_string(|| {
        view! {
            div {
                p { "Hydrated" }
                NoHydrate {
                    p { "Not hydrated" }
                }
            }
        }
    });
    assert_eq!(
        actual,
        r#"<div data-hk=0><p data-hk=1>Hydrated</p><p>Not hydrated</p></div>"#
    );
}
