use leptos::logging::log;
use std::panic;

/// Chains a hook after `console_error_panic_hook` that explains panics caused
/// by a view unmounting while one of its requests was still in flight.
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

        if is_owner_disposal(&message) {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A review table unmounted while its reviews were still loading");
            log!("[PANIC] 2. An upvote or search update landed after navigation away");
            if let Some(location) = panic_info.location() {
                log!("[PANIC] at {}:{}", location.file(), location.line());
            }
        }
    }));
}

pub fn is_owner_disposal(message: &str) -> bool {
    message.contains("OwnerDisposed") || message.contains("disposed")
}

/// Call from the hydrate/csr entry points.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_disposal_detection() {
        assert!(is_owner_disposal("called `Result::unwrap()` on an `Err` value: OwnerDisposed(..)"));
        assert!(!is_owner_disposal("index out of bounds"));
    }
}
