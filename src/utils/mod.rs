// Utils compartidos

pub mod constants;
pub mod format;
pub mod google_ffi;
pub mod payment_ffi;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use format::*;
pub use storage::*;
pub use validation::*;
