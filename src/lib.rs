pub mod address_book;
pub mod best_practices;
pub mod conference;
pub mod dogs;
pub mod reporting;
