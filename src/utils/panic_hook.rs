use std::panic;
use leptos::logging::log;

/// Chains a hook on top of `console_error_panic_hook` that explains panics
/// coming from a disposed reactive owner, which here means a request
/// finished after its opinions list or dialog was unmounted.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Reactive owner already disposed. Likely causes:");
            log!("[PANIC] 1. An opinion request resolved after the product page was left");
            log!("[PANIC] 2. A dialog was resolved after the modal host re-rendered");
        }
    }));
}

pub fn init() {
    console_error_panic_hook::set_once();
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up");
}
