/* src/client/rust/src/navigator/tests/mod.rs */
