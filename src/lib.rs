pub mod list;
pub use list::list as other_list;
pub mod ffi;
pub use ffi::ffi as other_ffi;
