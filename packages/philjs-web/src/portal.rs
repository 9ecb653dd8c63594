use crate::*;

/// A portal into a different part of the DOM. Only renders in client side rendering (CSR) mode.
/// Does nothing in SSR mode.
#[allow(non_snake_case)]
pub fn Portal(selector: &str, children: impl Into<View>) -> View {
    if !is_ssr!() {
        let parent = document()
            .query_selector(selector)
            .unwrap()
            .expect("could not find element matching selector");

        let nodes = children.into().as_web_sys();
        for node in &nodes {
            parent.append_child(node).unwrap();
        }

        on_cleanup(move || {
            for node in &nodes {
                let _ = parent.remove_child(node);
            }
        });
    }
    View::default()
}
