//! Wildcard expansion of certification-record model numbers.
//!
//! AHRI records compress model families with the `*` marker. Expansion is
//! purely positional and record-independent: a marked model expands into
//! the finite set of concrete model numbers it stands for, in a fixed
//! order.

/// The wildcard marker used by AHRI exports.
pub const WILDCARD: char = '*';

/// Furnace orientation letters, in expansion order.
const FURNACE_ORIENTATIONS: [char; 2] = ['R', 'D'];

/// Index of the indoor-unit marker that always resolves to one letter.
const INDOOR_FIXED_POS: usize = 2;

/// The letter the fixed indoor marker resolves to.
const INDOOR_FIXED_LETTER: char = 'P';

/// Cabinet-width letters the trailing indoor marker cycles through.
const CABINET_WIDTHS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Expand a furnace model. One marker yields exactly two variants, one per
/// orientation letter; no marker yields the model itself.
pub fn expand_furnace(model: &str) -> Vec<String> {
    let Some(pos) = model.find(WILDCARD) else {
        return vec![model.to_string()];
    };
    FURNACE_ORIENTATIONS
        .iter()
        .map(|&letter| substitute(model, pos, letter))
        .collect()
}

/// Expand an indoor-unit (air handler or coil) model.
///
/// A marker at index 2 always resolves to `P`. A marker two characters
/// before the end expands across the four cabinet widths; without it,
/// exactly one variant is produced.
pub fn expand_indoor(model: &str) -> Vec<String> {
    if !model.contains(WILDCARD) {
        return vec![model.to_string()];
    }

    let mut resolved = model.to_string();
    if char_at(&resolved, INDOOR_FIXED_POS) == Some(WILDCARD) {
        resolved = substitute(&resolved, INDOOR_FIXED_POS, INDOOR_FIXED_LETTER);
    }

    let Some(trailing) = resolved.len().checked_sub(2) else {
        return vec![resolved];
    };
    if char_at(&resolved, trailing) != Some(WILDCARD) {
        return vec![resolved];
    }
    CABINET_WIDTHS
        .iter()
        .map(|&letter| substitute(&resolved, trailing, letter))
        .collect()
}

/// Outdoor models never carry wildcards; expansion is the identity.
pub fn expand_outdoor(model: &str) -> Vec<String> {
    vec![model.to_string()]
}

fn char_at(s: &str, idx: usize) -> Option<char> {
    s.get(idx..)?.chars().next()
}

fn substitute(model: &str, idx: usize, letter: char) -> String {
    let mut out = String::with_capacity(model.len());
    for (pos, ch) in model.char_indices() {
        out.push(if pos == idx { letter } else { ch });
    }
    out
}
