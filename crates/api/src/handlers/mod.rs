pub mod character;
pub mod resource;
pub mod series;
