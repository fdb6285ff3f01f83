//! Board-facing adapters over `embedded-hal` pins.

pub mod gpio_button;
pub mod gpio_led;
pub mod gpio_touch;
#[cfg(feature = "board")]
pub mod systick;
pub mod traits;

pub use gpio_button::GpioButton;
pub use gpio_led::{ActiveLevel, GpioLed};
pub use gpio_touch::GpioTouchPads;
