pub mod booking;
pub mod composer;
pub mod delivery;
pub mod surface;
