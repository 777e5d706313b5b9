pub mod rendering;
pub mod services;
