//! End-to-end rendering tests

mod messages;
