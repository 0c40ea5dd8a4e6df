pub mod support;

mod cv_http;
