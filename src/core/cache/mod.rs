pub mod value_cache;
