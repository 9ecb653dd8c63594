use philjs_reactive::*;

fn main() {
    create_root(|| {
        let outer = create_signal(0);
        let scope = create_child_scope(|| {
            dbg!(outer.get());
            create_effect(move || {
                dbg!(outer.get());
            });
        });
        outer.set(1);
        scope.dispose();
        // Doesn't call the effect because it has been disposed.
        outer.set(2);
    })
    .dispose();
}
