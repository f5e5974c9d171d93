// Small helpers shared by the page components.

/// Log a line to the browser console. No-op off wasm so host tests stay quiet.
pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Same as [`clog`] but at warning level.
pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Render a countdown clock as `M:SS`.
pub fn format_clock(minutes: u32, seconds: u32) -> String {
    format!("{}:{:02}", minutes, seconds)
}

/// Config delay (ms) as a browser timer argument, saturating at `i32::MAX`.
pub fn timer_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Browser RNG in [0, 1).
pub fn random() -> f64 {
    js_sys::Math::random()
}

/// Fisher-Yates shuffle driven by a [0, 1) random source.
pub fn shuffle<T>(items: &mut [T], mut rand: impl FnMut() -> f64) {
    for i in (1..items.len()).rev() {
        let j = ((rand() * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(0, 1), "0:01");
        assert_eq!(format_clock(1, 59), "1:59");
        assert_eq!(format_clock(12, 0), "12:00");
    }

    #[test]
    fn timer_delay_never_goes_negative() {
        assert_eq!(timer_delay(2000), 2000);
        assert_eq!(timer_delay(u32::MAX), i32::MAX);
        assert_eq!(timer_delay(i32::MAX as u32 + 1), i32::MAX);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let original: Vec<String> = (0..17).map(|i| format!("/static/gallery/scene_{i}.png")).collect();
        let mut shuffled = original.clone();
        let mut seed = 0.37_f64;
        shuffle(&mut shuffled, || {
            seed = (seed * 7.13 + 0.11).fract();
            seed
        });
        assert_eq!(shuffled.len(), original.len());
        let mut a = original.clone();
        let mut b = shuffled.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_clamps_rng_of_one() {
        let mut v = vec![1, 2, 3];
        shuffle(&mut v, || 1.0);
        assert_eq!(v, vec![1, 2, 3]);
    }
}
