mod loader;
mod payload;

pub use loader::{LoadedPayload, LoaderError, load_payloads_from};
pub use payload::{Payload, PayloadError, PayloadKind};
