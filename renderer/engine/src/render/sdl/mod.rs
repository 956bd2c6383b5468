pub use backend::{SdlBackend, SdlBackendError};

mod backend;
