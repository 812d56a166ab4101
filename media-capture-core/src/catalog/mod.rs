pub mod media_catalog;
