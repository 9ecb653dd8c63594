use super::*;

#[wasm_bindgen_test]
fn svg_with_class_should_not_use_classname() {
    let root = create_root(|| {
        philjs::render_to(
            || {
                view! {
                    svg(class="my-class")
                }
            },
            &test_container(),
        );

        assert_eq!(
            query("svg").get_attribute("class").as_deref(),
            Some("my-class")
        );
    });
    root.dispose();
}
