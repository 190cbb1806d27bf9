//! Bundled, distilled sources for the built-in `std` and `ieee` libraries.
//!
//! Only package declarations are carried (no bodies), mirroring how the
//! analyzer preloads the standard libraries before user files.

/// Sources preloaded into the `std` library, in declaration order.
pub const STD_SOURCES: [(&str, &str); 3] = [
    ("std/standard.vhdl", include_str!("stdlibs/standard.vhdl")),
    ("std/textio.vhdl", include_str!("stdlibs/textio.vhdl")),
    ("std/env.vhdl", include_str!("stdlibs/env.vhdl")),
];

/// Sources preloaded into the `ieee` library, in declaration order.
pub const IEEE_SOURCES: [(&str, &str); 2] = [
    (
        "ieee/std_logic_1164.vhdl",
        include_str!("stdlibs/std_logic_1164.vhdl"),
    ),
    (
        "ieee/numeric_std.vhdl",
        include_str!("stdlibs/numeric_std.vhdl"),
    ),
];
