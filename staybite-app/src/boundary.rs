use std::panic::{catch_unwind, UnwindSafe};

/// The static notice shown in place of the whole UI when something below the
/// boundary blows up. No error detail, no partial recovery; a full reload is
/// the only way back.
pub const FALLBACK_NOTICE: &str = "Try Again Later. Please refresh the page or try again later.";

/// Top-level render boundary. Runs the given render step and, if it panics,
/// logs the crash and substitutes the fallback notice for that subtree's
/// output.
pub fn render_boundary<T>(render: impl FnOnce() -> T + UnwindSafe) -> Result<T, &'static str> {
    match catch_unwind(render) {
        Ok(output) => Ok(output),
        Err(panic) => {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            tracing::error!("UI crashed: {detail}");
            Err(FALLBACK_NOTICE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_render_passes_through() {
        assert_eq!(render_boundary(|| 42), Ok(42));
    }

    #[test]
    fn panic_is_replaced_by_the_fallback_notice() {
        let result: Result<(), _> = render_boundary(|| panic!("listing had no images"));
        assert_eq!(result, Err(FALLBACK_NOTICE));
    }

    #[test]
    fn boundary_survives_repeated_crashes() {
        let _ = render_boundary(|| -> () { panic!("first") });
        let _ = render_boundary(|| -> () { panic!("second") });
        assert_eq!(render_boundary(|| "still alive"), Ok("still alive"));
    }
}
