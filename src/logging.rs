use std::sync::Once;

static INIT: Once = Once::new();

/// Route `log` output to the browser console and install the panic hook.
/// Only the first call has any effect.
pub fn init(level: log::Level) {
    INIT.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            wasm_logger::init(wasm_logger::Config::new(level));
        }

        log::info!("clipbridge logging at {}", level);
    });
}
