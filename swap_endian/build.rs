mod platform {
    include!("src/platform.rs");
}

use std::env;

use platform::TargetOrder;

const OVERRIDE_VAR: &str = "SWAP_ENDIAN_BYTE_ORDER";

fn main() {
    println!("cargo::rerun-if-env-changed={OVERRIDE_VAR}");
    println!("cargo::rerun-if-changed=src/platform.rs");
    println!(r#"cargo::rustc-check-cfg=cfg(swap_endian_order, values("big", "little", "big_word", "little_word"))"#);
    println!("cargo::rustc-check-cfg=cfg(swap_endian_override)");

    // `var_os`: a value that is not UTF-8 is still an override, and must be
    // rejected rather than mistaken for an unset variable.
    let order = match env::var_os(OVERRIDE_VAR) {
        Some(value) => {
            let Some(order) = platform::parse_override_bytes(value.as_encoded_bytes()) else {
                panic!(
                    "{OVERRIDE_VAR}={value:?} is not a byte order; expected one of big, little, big-word, little-word"
                );
            };
            println!("cargo::warning=byte order overridden by {OVERRIDE_VAR}: {}", order.cfg_value());
            println!("cargo::rustc-cfg=swap_endian_override");
            order
        }
        None => from_target(),
    };

    println!(r#"cargo::rustc-cfg=swap_endian_order="{}""#, order.cfg_value());
}

fn from_target() -> TargetOrder {
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let endian = env::var("CARGO_CFG_TARGET_ENDIAN").ok();
    match platform::resolve(&arch, endian.as_deref()) {
        Some(order) => order,
        None => panic!(
            "cannot determine the byte order of target arch {arch:?} (target endian {endian:?}); set {OVERRIDE_VAR} to one of big, little, big-word, little-word"
        ),
    }
}
