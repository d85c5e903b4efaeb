// Build-time byte order lookup.
//
// This file is compiled twice: as `swap_endian::platform` and, through
// `include!`, inside `build.rs`. It must stay free of `crate::` paths and
// inner attributes.

/// A byte order resolved from the target platform at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetOrder {
    Big,
    Little,
    BigWord,
    LittleWord,
}

/// How an architecture's byte order is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Fixed(TargetOrder),
    /// Bi-endian: the target triple decides.
    TargetEndian,
}

const ARCHITECTURES: &[(&str, Rule)] = &[
    ("x86", Rule::Fixed(TargetOrder::Little)),
    ("x86_64", Rule::Fixed(TargetOrder::Little)),
    ("wasm32", Rule::Fixed(TargetOrder::Little)),
    ("wasm64", Rule::Fixed(TargetOrder::Little)),
    ("riscv32", Rule::Fixed(TargetOrder::Little)),
    ("riscv64", Rule::Fixed(TargetOrder::Little)),
    ("loongarch64", Rule::Fixed(TargetOrder::Little)),
    ("nvptx64", Rule::Fixed(TargetOrder::Little)),
    ("hexagon", Rule::Fixed(TargetOrder::Little)),
    ("avr", Rule::Fixed(TargetOrder::Little)),
    ("msp430", Rule::Fixed(TargetOrder::Little)),
    ("s390x", Rule::Fixed(TargetOrder::Big)),
    ("sparc", Rule::Fixed(TargetOrder::Big)),
    ("sparc64", Rule::Fixed(TargetOrder::Big)),
    ("m68k", Rule::Fixed(TargetOrder::Big)),
    ("arm", Rule::TargetEndian),
    ("aarch64", Rule::TargetEndian),
    ("arm64ec", Rule::TargetEndian),
    ("mips", Rule::TargetEndian),
    ("mips64", Rule::TargetEndian),
    ("mips32r6", Rule::TargetEndian),
    ("mips64r6", Rule::TargetEndian),
    ("powerpc", Rule::TargetEndian),
    ("powerpc64", Rule::TargetEndian),
    ("bpf", Rule::TargetEndian),
    ("csky", Rule::TargetEndian),
    ("xtensa", Rule::TargetEndian),
];

impl TargetOrder {
    /// The value used for the `swap_endian_order` cfg.
    pub const fn cfg_value(self) -> &'static str {
        match self {
            TargetOrder::Big => "big",
            TargetOrder::Little => "little",
            TargetOrder::BigWord => "big_word",
            TargetOrder::LittleWord => "little_word",
        }
    }
}

/// Look up the byte order of a target.
///
/// `arch` and `endian` are the values of `CARGO_CFG_TARGET_ARCH` and
/// `CARGO_CFG_TARGET_ENDIAN`. Architectures missing from the table fall back
/// to `endian` alone. Returns [`None`] when neither identifies a byte order.
pub fn resolve(arch: &str, endian: Option<&str>) -> Option<TargetOrder> {
    let from_endian = || match endian? {
        "big" => Some(TargetOrder::Big),
        "little" => Some(TargetOrder::Little),
        _ => None,
    };
    match ARCHITECTURES.iter().find(|(name, _)| *name == arch) {
        Some((_, Rule::Fixed(order))) => Some(*order),
        Some((_, Rule::TargetEndian)) | None => from_endian(),
    }
}

/// Parse a byte order name given by the build configuration.
///
/// Accepts `big`, `little`, `big-word` (or `honeywell`) and `little-word` (or
/// `pdp`). Case and the choice between `-` and `_` do not matter.
pub fn parse_override(value: &str) -> Option<TargetOrder> {
    parse_override_bytes(value.as_bytes())
}

/// [`parse_override`] for raw environment values, which need not be UTF-8.
///
/// Bytes outside ASCII never form a name, so such values are rejected rather
/// than ignored.
pub fn parse_override_bytes(value: &[u8]) -> Option<TargetOrder> {
    let mut normalized = [0u8; 16];
    let value = value.trim_ascii();
    if value.len() > normalized.len() {
        return None;
    }
    for (dst, src) in normalized.iter_mut().zip(value) {
        *dst = match src.to_ascii_lowercase() {
            b'-' => b'_',
            c => c,
        };
    }
    match &normalized[..value.len()] {
        b"big" | b"big_endian" => Some(TargetOrder::Big),
        b"little" | b"little_endian" => Some(TargetOrder::Little),
        b"big_word" | b"honeywell" => Some(TargetOrder::BigWord),
        b"little_word" | b"pdp" => Some(TargetOrder::LittleWord),
        _ => None,
    }
}
