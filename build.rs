fn main() {
    println!("cargo:rerun-if-changed=sdkconfig.defaults");

    // Host builds (tests) carry no ESP-IDF environment to propagate.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
