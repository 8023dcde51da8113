pub mod tools;

pub use self::tools::show_rust_core_dependencies;
