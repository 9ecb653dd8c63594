use philjs_reactive::*;

fn main() {
    create_root(|| {
        let data = create_signal(0);
        let doubled = create_memo(move || data.get() * 2);
        create_effect(on(doubled, move || {
            println!("data value changed. new value = {data}, doubled value = {doubled}")
        }));
        data.set(1);
        data.set(2);
        data.set(3);
        data.set(4);
    })
    .dispose();
}
