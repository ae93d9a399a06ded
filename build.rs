use std::fs;
use std::path::Path;

const WIFI_CONFIG: &str = "wifi_config.h";

/// Value of a `#define NAME "value"` line.
fn define<'a>(contents: &'a str, name: &str) -> Option<&'a str> {
    contents
        .lines()
        .find(|l| {
            let mut words = l.split_whitespace();
            words.next() == Some("#define") && words.next() == Some(name)
        })
        .and_then(|l| l.split('"').nth(1))
}

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    println!("cargo:rerun-if-changed={}", WIFI_CONFIG);

    // Compiled-in WiFi defaults; NVS overrides them at runtime
    let contents = if Path::new(WIFI_CONFIG).exists() {
        fs::read_to_string(WIFI_CONFIG)?
    } else {
        println!("cargo:warning={} not found! Copy {}.example and add your credentials.", WIFI_CONFIG, WIFI_CONFIG);
        String::new()
    };

    println!("cargo:rustc-env=WIFI_SSID={}", define(&contents, "WIFI_SSID").unwrap_or_default());
    println!("cargo:rustc-env=WIFI_PASSWORD={}", define(&contents, "WIFI_PASSWORD").unwrap_or_default());

    Ok(())
}
