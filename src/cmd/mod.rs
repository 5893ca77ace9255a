//! CLI command implementations.
//!
//! | Module         | Commands handled |
//! |----------------|------------------|
//! | `register`     | `Register`       |
//! | `destinations` | `Destinations`   |

pub mod destinations;
pub mod register;

pub use destinations::cmd_destinations;
pub use register::cmd_register;
