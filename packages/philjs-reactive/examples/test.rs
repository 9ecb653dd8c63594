use std::cell::RefCell;
use std::rc::Rc;

use philjs_reactive::*;

fn main() {
    create_root(|| {
        let trigger = create_signal(());
        let disposer = Rc::new(RefCell::new(None::<Box<dyn FnOnce()>>));
        let tmp = Rc::clone(&disposer);

        let scope = create_child_scope(move || {
            let data = create_signal(0);
            create_effect(move || {
                trigger.track();
                if let Some(tmp) = tmp.take() {
                    tmp();
                }
                let a = data.get();
                dbg!(a);
            });
        });
        *disposer.borrow_mut() = Some(Box::new(move || scope.dispose()));
        trigger.set(());
    })
    .dispose();
}
