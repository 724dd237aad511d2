pub mod layouts;
pub mod pages;

pub use pages::routes::App;
