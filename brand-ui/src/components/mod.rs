pub mod brand_mark;
pub mod providers;
pub mod session_provider;
pub mod toast_provider;
