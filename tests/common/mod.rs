#![allow(dead_code)]

extern crate env_logger;

pub fn init_test() {
    let _ = self::env_logger::builder().is_test(true).try_init();
}
