//! Quantity Control Component
//!
//! The −/value/+ stepper on each row. Holding a button repeats the step
//! after a short delay; clicking the value opens an inline numeric editor
//! with Enter/Escape/arrow-key handling.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::models::QUANTITY_MIN;
use crate::store::{
    store_decrement_quantity, store_increment_quantity, store_set_quantity, use_app_store,
    AppStateStoreFields,
};

/// Delay before a held button starts repeating
const HOLD_DELAY_MS: u32 = 300;
/// Repeat period once a held button is repeating
const HOLD_INTERVAL_MS: u32 = 100;

/// Timers backing one press-and-hold gesture. Dropping this cancels the
/// pending delay and, through the shared slot, any running interval.
struct HoldRepeat {
    _delay: Timeout,
    _repeat: Rc<RefCell<Option<Interval>>>,
}

impl HoldRepeat {
    /// Run `action` once now, then repeatedly after the initial delay
    fn start(action: impl Fn() + Clone + 'static) -> Self {
        action();
        let repeat = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&repeat);
        let delay = Timeout::new(HOLD_DELAY_MS, move || {
            *slot.borrow_mut() = Some(Interval::new(HOLD_INTERVAL_MS, action));
        });
        Self {
            _delay: delay,
            _repeat: repeat,
        }
    }
}

/// Quantity stepper for one item
#[component]
pub fn QuantityControl(item_id: u32) -> impl IntoView {
    let store = use_app_store();

    let quantity = Memo::new(move |_| {
        store
            .items()
            .read()
            .iter()
            .find(|i| i.id == item_id)
            .map(|i| i.quantity)
            .unwrap_or(QUANTITY_MIN)
    });

    let (editing, set_editing) = signal(false);
    let (temp, set_temp) = signal(String::new());

    // Active hold gesture; replaced on every press, dropped on release and
    // on teardown so no timer outlives the row.
    let hold = StoredValue::new_local(None::<HoldRepeat>);
    on_cleanup(move || hold.set_value(None));

    let start_decrement = move || {
        if quantity.get() > QUANTITY_MIN {
            hold.set_value(Some(HoldRepeat::start(move || {
                store_decrement_quantity(&store, item_id)
            })));
        }
    };
    let start_increment = move || {
        hold.set_value(Some(HoldRepeat::start(move || {
            store_increment_quantity(&store, item_id)
        })));
    };
    let stop = move || hold.set_value(None);

    // Inline editor: commits only a positive integer; the field reverts to
    // the stored value when closed with anything else in it.
    let commit_valid = move || -> bool {
        match temp.get().trim().parse::<i64>() {
            Ok(q) if q > 0 => {
                store_set_quantity(&store, item_id, q);
                true
            }
            _ => false,
        }
    };

    let open_editor = move |_| {
        set_temp.set(quantity.get().to_string());
        set_editing.set(true);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            if commit_valid() {
                set_editing.set(false);
            }
        }
        "Escape" => set_editing.set(false),
        "ArrowUp" => {
            ev.prevent_default();
            let next = temp.get().trim().parse::<i64>().unwrap_or(0) + 1;
            set_temp.set(next.to_string());
            store_set_quantity(&store, item_id, next);
        }
        "ArrowDown" => {
            ev.prevent_default();
            let next = (temp.get().trim().parse::<i64>().unwrap_or(0) - 1).max(1);
            set_temp.set(next.to_string());
            store_set_quantity(&store, item_id, next);
        }
        _ => {}
    };

    let on_blur = move |_| {
        commit_valid();
        set_editing.set(false);
    };

    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    view! {
        <div class="quantity-control">
            <button
                class="quantity-btn"
                disabled=move || quantity.get() <= QUANTITY_MIN
                on:mousedown=move |_| start_decrement()
                on:mouseup=move |_| stop()
                on:mouseleave=move |_| stop()
                on:touchstart=move |_| start_decrement()
                on:touchend=move |_| stop()
            >
                "−"
            </button>

            {move || if editing.get() {
                view! {
                    <input
                        type="number"
                        class="quantity-input"
                        min="1"
                        step="1"
                        node_ref=input_ref
                        prop:value=move || temp.get()
                        on:input=move |ev| set_temp.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        on:blur=on_blur
                    />
                }.into_any()
            } else {
                view! {
                    <span class="quantity-value" on:click=open_editor>
                        {move || quantity.get()}
                    </span>
                }.into_any()
            }}

            <button
                class="quantity-btn"
                on:mousedown=move |_| start_increment()
                on:mouseup=move |_| stop()
                on:mouseleave=move |_| stop()
                on:touchstart=move |_| start_increment()
                on:touchend=move |_| stop()
            >
                "+"
            </button>
        </div>
    }
}
