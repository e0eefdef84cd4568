//! Status logging
//!
//! Lines go to the ESP serial console when the `esp32-log` feature is on,
//! otherwise the arguments are type-checked and dropped.

macro_rules! status {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        let _ = format_args!($($arg)*);
    }};
}
