use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

/// Flag de "sigue montado" para los callbacks async: acá no hay
/// cancelación cooperativa, así que cada spawn_local debe chequearlo
/// antes de tocar estado después de un await.
#[hook]
pub fn use_mounted() -> Rc<RefCell<bool>> {
    let mounted = use_mut_ref(|| true);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    mounted
}
