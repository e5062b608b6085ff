//! Property names, abbreviation derivation and key normalization.
//!
//! Every canonical property name has an automatically derived short alias:
//! the first character plus every subsequent uppercase character, lowercased
//! (`marginTop` → `mt`, `backgroundColor` → `bc`). Derivation is applied over
//! [`PROPERTIES`] in order, later names overwriting earlier ones on collision
//! (`maxHeight` and `minHeight` both derive `mh`; `minHeight` wins by
//! position). A curated override set then pins the aliases for properties the
//! automatic rule serves badly — `p` would otherwise land on `position`
//! instead of `padding`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Canonical property names, in derivation order.
pub const PROPERTIES: &[&str] = &[
    "alignContent",
    "alignItems",
    "alignSelf",
    "aspectRatio",
    "borderBottomWidth",
    "borderLeftWidth",
    "borderRightWidth",
    "borderTopWidth",
    "borderEndWidth",
    "borderStartWidth",
    "borderWidth",
    "bottom",
    "direction",
    "display",
    "end",
    "start",
    "flex",
    "flexDirection",
    "flexBasis",
    "flexGrow",
    "flexShrink",
    "flexWrap",
    "height",
    "justifyContent",
    "left",
    "margin",
    "marginBottom",
    "marginHorizontal",
    "marginLeft",
    "marginRight",
    "marginTop",
    "marginVertical",
    "marginEnd",
    "marginStart",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "padding",
    "paddingBottom",
    "paddingHorizontal",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "paddingVertical",
    "paddingEnd",
    "paddingStart",
    "position",
    "right",
    "top",
    "width",
    "zIndex",
    "shadowColor",
    "shadowOffset",
    "shadowOpacity",
    "shadowRadius",
    "decomposedMatrix",
    "transform",
    "transformMatrix",
    "backfaceVisibility",
    "backgroundColor",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderColor",
    "borderRadius",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "opacity",
    "overflow",
    "resizeMode",
    "tintColor",
    "overlayColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderRightColor",
    "borderStyle",
    "borderTopColor",
    "elevation",
    "color",
    "fontFamily",
    "fontSize",
    "fontStyle",
    "fontVariant",
    "textTransform",
    "fontWeight",
    "includeFontPadding",
    "lineHeight",
    "textAlign",
    "textDecorationLine",
    "textShadowColor",
    "textShadowOffset",
    "textShadowRadius",
    "textAlignVertical",
    "letterSpacing",
    "textDecorationColor",
    "textDecorationStyle",
    "writingDirection",
    "borderBottomEndRadius",
    "borderBottomStartRadius",
    "borderEndColor",
    "borderStartColor",
    "borderTopEndRadius",
    "borderTopStartRadius",
];

/// Manual alias overrides, applied after automatic derivation.
const OVERRIDES: &[(&str, &str)] = &[
    ("bc", "backgroundColor"),
    ("d", "display"),
    ("e", "elevation"),
    ("fs", "fontSize"),
    ("fw", "fontWeight"),
    ("mh", "minHeight"),
    ("mw", "minWidth"),
    ("o", "overflow"),
    ("p", "padding"),
    ("so", "shadowOpacity"),
    ("t", "top"),
];

static ABBREVIATIONS: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(PROPERTIES.len() + OVERRIDES.len());
    for property in PROPERTIES {
        map.insert(derive_abbreviation(property), *property);
    }
    for (short, property) in OVERRIDES {
        map.insert((*short).to_string(), *property);
    }
    map
});

/// Derives the short alias for a property name: the first character plus
/// every subsequent uppercase character, lowercased.
pub fn derive_abbreviation(name: &str) -> String {
    let mut short = String::new();
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        short.extend(first.to_lowercase());
    }
    for c in chars {
        if c.is_ascii_uppercase() {
            short.push(c.to_ascii_lowercase());
        }
    }
    short
}

/// Resolves a short alias to its canonical property name.
///
/// Returns `None` for keys that are not registered abbreviations — including
/// canonical names themselves, which pass through the compiler unchanged.
pub fn resolve_abbreviation(key: &str) -> Option<&'static str> {
    ABBREVIATIONS.get(key).copied()
}

/// Normalizes a dash-case key to camelCase: `border-top-width` →
/// `borderTopWidth`. Keys without dashes are returned as-is.
pub(crate) fn dedash(key: &str) -> String {
    if !key.contains('-') {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    let mut segments = key.split('-');
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_basic() {
        assert_eq!(derive_abbreviation("marginTop"), "mt");
        assert_eq!(derive_abbreviation("backgroundColor"), "bc");
        assert_eq!(derive_abbreviation("borderBottomLeftRadius"), "bblr");
        assert_eq!(derive_abbreviation("flex"), "f");
    }

    #[test]
    fn test_derive_is_deterministic() {
        for property in PROPERTIES {
            assert_eq!(
                derive_abbreviation(property),
                derive_abbreviation(property)
            );
        }
    }

    #[test]
    fn test_resolve_derived() {
        assert_eq!(resolve_abbreviation("mt"), Some("marginTop"));
        assert_eq!(resolve_abbreviation("bc"), Some("backgroundColor"));
        assert_eq!(resolve_abbreviation("bs"), Some("borderStyle"));
        assert_eq!(resolve_abbreviation("zi"), Some("zIndex"));
    }

    #[test]
    fn test_overrides_beat_derivation() {
        // fontStyle derives "fs" after fontSize, so the override pins it back
        assert_eq!(resolve_abbreviation("fs"), Some("fontSize"));
        // position derives "p" after padding
        assert_eq!(resolve_abbreviation("p"), Some("padding"));
        assert_eq!(resolve_abbreviation("t"), Some("top"));
        assert_eq!(resolve_abbreviation("o"), Some("overflow"));
    }

    #[test]
    fn test_later_property_wins_collision() {
        // marginHorizontal, maxHeight and minHeight all derive "mh";
        // minHeight is last in the list (and the override agrees)
        assert_eq!(resolve_abbreviation("mh"), Some("minHeight"));
        assert_eq!(resolve_abbreviation("mw"), Some("minWidth"));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve_abbreviation("xyz"), None);
        // canonical names are not abbreviations
        assert_eq!(resolve_abbreviation("marginTop"), None);
    }

    #[test]
    fn test_dedash() {
        assert_eq!(dedash("margin-top"), "marginTop");
        assert_eq!(dedash("border-top-width"), "borderTopWidth");
        assert_eq!(dedash("margin"), "margin");
        assert_eq!(dedash("hairline-width"), "hairlineWidth");
    }
}
