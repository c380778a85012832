use web_sys::window;

/// Short vibration on tap, where the device supports it.
pub fn vibrate_tap() {
    if let Some(window) = window() {
        let _ = window.navigator().vibrate_with_duration(10);
    }
}
