pub mod class_label;
pub mod correction_store;
pub mod knowledge_base;
pub mod record;
