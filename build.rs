fn main() {
    // Propagate ESP-IDF environment only when building the firmware
    // image; host library/test builds have no sysenv to inherit.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
