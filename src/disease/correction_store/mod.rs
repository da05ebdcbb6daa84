pub mod impl_in_memory;
pub mod interface;
