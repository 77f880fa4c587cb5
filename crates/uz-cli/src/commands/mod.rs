pub mod accuracy_ops;
pub mod config_ops;
pub mod convert_ops;
