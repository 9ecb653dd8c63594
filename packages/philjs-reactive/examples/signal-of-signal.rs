use philjs_reactive::*;

fn main() {
    create_root(|| {
        let data = create_signal(123);
        dbg!(data.get());
        let signal_ref = create_signal(data);
        dbg!(signal_ref.get().get());
    })
    .dispose();
}
