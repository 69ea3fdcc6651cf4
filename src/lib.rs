pub mod alphabet;
pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod key;
pub mod optimizer;
pub mod scorer;
pub mod words;
// cmd and reports belong to the binary (src/main.rs).
