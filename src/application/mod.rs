pub mod builder;
pub mod dto;
pub mod errors;
pub mod ports;
pub mod token;
pub mod use_cases;
