pub mod stores;

pub use app::{TestApp, get, make_test_app, make_test_app_with_store, post_json, send};
