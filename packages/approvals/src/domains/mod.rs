pub mod listings;
