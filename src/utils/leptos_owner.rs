use leptos::Owner;

/// Runs `f` under `owner`, the reactive owner captured before an `await`.
/// If the owning view has been disposed in the meantime, logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    if let Some(owner) = owner {
        match leptos::try_with_owner(owner, f) {
            Ok(result) => Some(result),
            Err(err) => {
                leptos::logging::log!("[OWNER] Owner disposed before {}: {:?}", log_context, err);
                None
            }
        }
    } else {
        leptos::logging::log!("[OWNER] No Leptos owner in context: {}", log_context);
        None
    }
}
