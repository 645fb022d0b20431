pub mod basics;
pub mod cognition;
pub mod concerns;
pub mod family_trauma;
pub mod home_safety;
pub mod presenting;
pub mod suicide;
pub mod violence;
