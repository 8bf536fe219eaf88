pub mod impl_object_url;
pub mod interface;
