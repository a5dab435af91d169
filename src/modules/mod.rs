pub mod praise;
