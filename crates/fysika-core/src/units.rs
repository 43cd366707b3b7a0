//! Unit normalization and conversion.
//!
//! Two static tables drive this module. The synonym table maps free-form
//! spellings ("Newtons", "ms-1", "ohm") to canonical tokens so units
//! compare reliably. The conversion table maps canonical tokens to a
//! base unit and scale factor; two units are convertible iff they share
//! a base unit. Units outside the conversion families (force, velocity,
//! voltage, ...) normalize for equality checks only and never convert.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Free-form spelling → canonical token. Lookups happen after
/// lowercasing and trimming, so every key is lowercase.
static UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("n", "n"),
    ("newton", "n"),
    ("newtons", "n"),
    ("kg", "kg"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("g", "g"),
    ("gram", "g"),
    ("grams", "g"),
    ("m", "m"),
    ("meter", "m"),
    ("meters", "m"),
    ("metre", "m"),
    ("metres", "m"),
    ("cm", "cm"),
    ("centimeter", "cm"),
    ("centimeters", "cm"),
    ("s", "s"),
    ("sec", "s"),
    ("second", "s"),
    ("seconds", "s"),
    ("m/s", "m/s"),
    ("ms-1", "m/s"),
    ("meter/second", "m/s"),
    ("meters/second", "m/s"),
    ("mps", "m/s"),
    ("m/s²", "m/s²"),
    ("m/s2", "m/s²"),
    ("ms-2", "m/s²"),
    ("meter/second²", "m/s²"),
    ("meters/second²", "m/s²"),
    ("j", "j"),
    ("joule", "j"),
    ("joules", "j"),
    ("kj", "kj"),
    ("kilojoule", "kj"),
    ("kilojoules", "kj"),
    ("w", "w"),
    ("watt", "w"),
    ("watts", "w"),
    ("j/s", "w"),
    ("kw", "kw"),
    ("kilowatt", "kw"),
    ("kilowatts", "kw"),
    ("pa", "pa"),
    ("pascal", "pa"),
    ("pascals", "pa"),
    ("n/m²", "pa"),
    ("n/m2", "pa"),
    ("kpa", "kpa"),
    ("kilopascal", "kpa"),
    ("bar", "bar"),
    ("kg/m³", "kg/m³"),
    ("kg/m3", "kg/m³"),
    ("g/cm³", "g/cm³"),
    ("g/cm3", "g/cm³"),
    ("g/l", "g/l"),
    ("kg/l", "kg/l"),
    ("a", "a"),
    ("amp", "a"),
    ("ampere", "a"),
    ("amperes", "a"),
    ("v", "v"),
    ("volt", "v"),
    ("volts", "v"),
    ("ω", "ω"),
    ("ohm", "ω"),
    ("ohms", "ω"),
    ("(fraction)", "(fraction)"),
    ("fraction", "(fraction)"),
    ("%", "%"),
    ("percent", "%"),
];

/// Canonical token → (base unit, factor to base). `value * factor`
/// expresses the value in the base unit of its family.
static UNIT_CONVERSIONS: &[(&str, &str, f64)] = &[
    // Energy: base unit is J
    ("j", "j", 1.0),
    ("kj", "j", 1000.0),
    // Power: base unit is W
    ("w", "w", 1.0),
    ("kw", "w", 1000.0),
    // Pressure: base unit is Pa
    ("pa", "pa", 1.0),
    ("kpa", "pa", 1000.0),
    ("bar", "pa", 100_000.0),
    // Length: base unit is m
    ("m", "m", 1.0),
    ("km", "m", 1000.0),
    ("cm", "m", 0.01),
    ("mm", "m", 0.001),
    // Mass: base unit is kg
    ("kg", "kg", 1.0),
    ("g", "kg", 0.001),
    // Time: base unit is s
    ("s", "s", 1.0),
    ("ms", "s", 0.001),
    ("min", "s", 60.0),
    ("h", "s", 3600.0),
];

static SYNONYM_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| UNIT_SYNONYMS.iter().copied().collect());

static CONVERSION_INDEX: LazyLock<HashMap<&'static str, (&'static str, f64)>> =
    LazyLock::new(|| {
        UNIT_CONVERSIONS
            .iter()
            .map(|&(unit, base, factor)| (unit, (base, factor)))
            .collect()
    });

/// Normalize a unit string to its canonical token.
///
/// Total function: unknown units come back lowercased and trimmed so
/// they still compare consistently, they just never convert.
pub fn normalize_unit(unit: &str) -> String {
    let lowered = unit.trim().to_lowercase();
    match SYNONYM_INDEX.get(lowered.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lowered,
    }
}

/// True when the two spellings denote the same unit.
pub fn is_unit_correct(given: &str, correct: &str) -> bool {
    normalize_unit(given) == normalize_unit(correct)
}

/// True when both units have conversion entries sharing a base unit.
///
/// Units without a conversion entry are never convertible here, not even
/// to themselves; plain equality goes through [`is_unit_correct`].
pub fn are_units_convertible(unit_a: &str, unit_b: &str) -> bool {
    let a = CONVERSION_INDEX.get(normalize_unit(unit_a).as_str());
    let b = CONVERSION_INDEX.get(normalize_unit(unit_b).as_str());
    match (a, b) {
        (Some((base_a, _)), Some((base_b, _))) => base_a == base_b,
        _ => false,
    }
}

/// Convert a value between units of the same family.
///
/// Identical units pass the value through unchanged. Otherwise the value
/// goes through the shared base unit: `value * scale(from) / scale(to)`.
/// Returns `None` when either unit is unknown or the families differ.
pub fn convert_value(value: f64, from: &str, to: &str) -> Option<f64> {
    let norm_from = normalize_unit(from);
    let norm_to = normalize_unit(to);

    if norm_from == norm_to {
        return Some(value);
    }

    let (base_from, factor_from) = CONVERSION_INDEX.get(norm_from.as_str()).copied()?;
    let (base_to, factor_to) = CONVERSION_INDEX.get(norm_to.as_str()).copied()?;

    if base_from != base_to {
        return None;
    }

    Some(value * factor_from / factor_to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_force_spellings() {
        assert_eq!(normalize_unit("N"), "n");
        assert_eq!(normalize_unit("newton"), "n");
        assert_eq!(normalize_unit("Newtons"), "n");
    }

    #[test]
    fn normalizes_velocity_and_acceleration() {
        assert_eq!(normalize_unit("m/s"), "m/s");
        assert_eq!(normalize_unit("ms-1"), "m/s");
        assert_eq!(normalize_unit("meters/second"), "m/s");
        assert_eq!(normalize_unit("m/s2"), "m/s²");
        assert_eq!(normalize_unit("M/S²"), "m/s²");
    }

    #[test]
    fn normalizes_greek_omega() {
        assert_eq!(normalize_unit("Ω"), "ω");
        assert_eq!(normalize_unit("ohm"), "ω");
        assert_eq!(normalize_unit("Ohms"), "ω");
    }

    #[test]
    fn unknown_units_fall_through_lowercased() {
        assert_eq!(normalize_unit("  Lightyear "), "lightyear");
        assert_eq!(normalize_unit(""), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = ["N", "Newtons", "ms-1", "m/s2", "Ω", "kW", "xyz", "", "J/s"];
        for unit in samples {
            let once = normalize_unit(unit);
            assert_eq!(normalize_unit(&once), once, "not idempotent for {unit:?}");
        }
    }

    #[test]
    fn unit_correct_is_synonym_insensitive() {
        assert!(is_unit_correct("Newtons", "N"));
        assert!(is_unit_correct("J/s", "watt"));
        assert!(!is_unit_correct("N", "kg"));
    }

    #[test]
    fn convertible_within_families() {
        assert!(are_units_convertible("kW", "W"));
        assert!(are_units_convertible("kJ", "J"));
        assert!(are_units_convertible("bar", "kPa"));
        assert!(are_units_convertible("km", "mm"));
        assert!(are_units_convertible("h", "ms"));
    }

    #[test]
    fn not_convertible_across_families_or_unknowns() {
        assert!(!are_units_convertible("W", "J"));
        assert!(!are_units_convertible("W", "xyz"));
        assert!(!are_units_convertible("kg", "s"));
        // No conversion entry: equality is checked elsewhere, not here.
        assert!(!are_units_convertible("N", "N"));
    }

    #[test]
    fn converts_through_base_unit() {
        assert_eq!(convert_value(1.0, "kW", "W"), Some(1000.0));
        assert_eq!(convert_value(2000.0, "J", "kJ"), Some(2.0));
        assert_eq!(convert_value(1.0, "bar", "kPa"), Some(100.0));
        assert_eq!(convert_value(90.0, "min", "h"), Some(1.5));
        assert_eq!(convert_value(250.0, "g", "kg"), Some(0.25));
    }

    #[test]
    fn same_unit_passes_value_through() {
        assert_eq!(convert_value(42.0, "W", "watt"), Some(42.0));
        // Even for units with no conversion entry.
        assert_eq!(convert_value(3.0, "N", "newtons"), Some(3.0));
    }

    #[test]
    fn conversion_fails_across_families() {
        assert_eq!(convert_value(5.0, "W", "J"), None);
        assert_eq!(convert_value(5.0, "W", "xyz"), None);
    }

    #[test]
    fn conversion_round_trip_is_exact_enough() {
        let pairs = [("kW", "W"), ("J", "kJ"), ("bar", "Pa"), ("cm", "km"), ("min", "ms")];
        for (a, b) in pairs {
            for v in [1.0, 0.32, 1234.5, -7.25] {
                let there = convert_value(v, a, b).unwrap();
                let back = convert_value(there, b, a).unwrap();
                assert!(
                    (back - v).abs() <= v.abs() * 1e-9 + 1e-12,
                    "round trip {a}->{b} drifted for {v}: got {back}"
                );
            }
        }
    }
}
