mod auth;
mod deep_sleep;
mod device;
mod led_brightness;
mod position;
mod tracker;
mod tracker_settings;

pub use auth::{PhoneVerificationResponse, SmsCodeResponse, UserToken};
pub use deep_sleep::DeepSleep;
pub use device::Device;
pub use led_brightness::LedBrightness;
pub use position::Position;
pub use tracker::Tracker;
pub use tracker_settings::{DEFAULT_GENERATION, TrackerFeatures, TrackerSettings};
