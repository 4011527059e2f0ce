pub mod appointment;
pub mod assistant;
pub mod associate;
pub mod business;
pub mod location;
pub mod photo;
pub mod product;
pub mod product_link;
pub mod schedule;
