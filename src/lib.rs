pub mod coordinator;
pub mod destination;
pub mod errors;
pub mod model;
pub mod progress;
pub mod response;
pub mod transport;
pub mod ui;
pub mod validate;
pub mod wizard;
