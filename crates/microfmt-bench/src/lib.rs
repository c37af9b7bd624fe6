//! Shared inputs for the render benchmarks.

use microfmt_core::Arg;

/// Templates paired with a label, from plain text to every presentation.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("literal", "sensor ready, no placeholders here"),
    ("int", "count={} delta={:+} raw={:#010x}"),
    ("float", "temp {:>8.2} C, rh {:.1}%"),
    ("text", "[{:<12}] [{:^7}] [{:>5}]"),
    ("mixed", "{0}:{1:>6}|{2:#b}|{3:.3}|{4}|{5:c}"),
];

/// Arguments large enough to satisfy every template in [`TEMPLATES`].
#[must_use]
pub fn sample_args() -> [Arg<'static>; 6] {
    [
        Arg::Int(-48_213),
        Arg::Uint(912),
        Arg::Uint(0x5a5a),
        Arg::Float(23.456_78),
        Arg::Str("node-7"),
        Arg::Char('x'),
    ]
}
