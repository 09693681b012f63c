pub mod fragment;
pub mod navigation;
pub mod router;
