pub mod diagnosis;
pub mod vibration;
