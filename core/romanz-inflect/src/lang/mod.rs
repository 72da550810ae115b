mod ca;
mod es;
mod fr;
mod it;
mod pt;
mod ro;

pub use ca::Catalan;
pub use es::Spanish;
pub use fr::French;
pub use it::Italian;
pub use pt::Portuguese;
pub use ro::Romanian;
