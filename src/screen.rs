// Screen enumeration: data model, display source capability, record building.

pub mod enumerate;
pub mod source;
pub mod types;

#[cfg(windows)]
pub mod win32;
