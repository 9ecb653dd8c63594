use super::*;

#[wasm_bindgen_test]
fn test_portal() {
    let test_container = test_container();

    let el = document().create_element("div").unwrap();
    el.set_id("portal-target");
    test_container.append_child(&el).unwrap();

    let root = create_root(|| {
        philjs::render_to(
            || philjs::web::Portal("#portal-target", view! { "Hello World!" }),
            &test_container,
        );
    });

    assert_eq!(el.inner_html(), "Hello World!");

    // Destroying the portal should remove its nodes from the target element.
    root.dispose();

    assert_eq!(el.inner_html(), "");
}
