mod gray;
mod hsv;

pub use gray::gray_from_rgb;
pub use hsv::{hsv_from_rgb, rgb_from_hsv};
