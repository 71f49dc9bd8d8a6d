//! Gate code types.

use std::fmt;

/// Error returned when parsing an invalid gate code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid gate code: {reason}")]
pub struct InvalidGateCode {
    reason: &'static str,
}

/// A valid 3-letter hyperspace gate code.
///
/// Gate codes are always 3 uppercase ASCII letters (e.g. `SOL`, `PRX`).
/// This type guarantees that any `GateCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use gate_server::domain::GateCode;
///
/// let sol = GateCode::parse("SOL").unwrap();
/// assert_eq!(sol.as_str(), "SOL");
///
/// // Strict parsing insists on uppercase and exact length...
/// assert!(GateCode::parse("sol").is_err());
/// assert!(GateCode::parse("SOLX").is_err());
///
/// // ...while normalization cleans up user input first.
/// assert_eq!(GateCode::parse_normalized(" sol "), Ok(sol));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GateCode([u8; 3]);

impl GateCode {
    /// Parse a gate code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidGateCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidGateCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidGateCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(GateCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse a gate code, normalizing surrounding whitespace and case first.
    ///
    /// Accepts user-supplied input like `" sol "` for `SOL`.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidGateCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the gate code as a string slice.
    pub fn as_str(&self) -> &str {
        // Parse is the only constructor, so the bytes are ASCII A-Z.
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for GateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GateCode({})", self.as_str())
    }
}

impl fmt::Display for GateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_gate_codes() {
        for raw in ["SOL", "PRX", "SIR", "DEN", "FOM", "ALS"] {
            let code = GateCode::parse(raw).unwrap();
            assert_eq!(code.as_str(), raw);
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        // Length must be exactly three.
        assert!(GateCode::parse("").is_err());
        assert!(GateCode::parse("RA").is_err());
        assert!(GateCode::parse("DENEB").is_err());

        // Case is significant for strict parsing.
        assert!(GateCode::parse("den").is_err());
        assert!(GateCode::parse("Den").is_err());

        // Only letters qualify; digits, punctuation and non-ASCII don't.
        assert!(GateCode::parse("GT7").is_err());
        assert!(GateCode::parse("A-B").is_err());
        assert!(GateCode::parse("A B").is_err());
        assert!(GateCode::parse("VÉG").is_err());
    }

    #[test]
    fn normalization_handles_url_style_input() {
        // Path segments arrive in whatever case the client typed.
        assert_eq!(GateCode::parse_normalized("den"), GateCode::parse("DEN"));
        assert_eq!(GateCode::parse_normalized(" Fom "), GateCode::parse("FOM"));

        // Normalization fixes case and padding, not length.
        assert!(GateCode::parse_normalized("de").is_err());
        assert!(GateCode::parse_normalized(" deneb ").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = GateCode::parse("VEG").unwrap();
        assert_eq!(code.to_string(), "VEG");
        assert_eq!(format!("{:?}", code), "GateCode(VEG)");
    }

    #[test]
    fn ordering_matches_code_listing_order() {
        // The registry relies on this for stable /gates output.
        let ald = GateCode::parse("ALD").unwrap();
        let als = GateCode::parse("ALS").unwrap();
        let veg = GateCode::parse("VEG").unwrap();
        assert!(ald < als);
        assert!(als < veg);
    }

    #[test]
    fn usable_as_an_ordered_map_key() {
        use std::collections::BTreeMap;

        let mut names = BTreeMap::new();
        names.insert(GateCode::parse("SOL").unwrap(), "Sol");
        names.insert(GateCode::parse("ARC").unwrap(), "Arcturus");

        assert_eq!(names.get(&GateCode::parse("SOL").unwrap()), Some(&"Sol"));
        assert_eq!(names.get(&GateCode::parse("RAN").unwrap()), None);

        let keys: Vec<&str> = names.keys().map(GateCode::as_str).collect();
        assert_eq!(keys, vec!["ARC", "SOL"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Three uppercase letters always parse, and the code prints back
        /// exactly what went in.
        #[test]
        fn three_letters_roundtrip(s in "[A-Z]{3}") {
            let code = GateCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
            prop_assert_eq!(code.to_string(), s);
        }

        /// Normalized parsing agrees with strict parsing of the cleaned
        /// input, whatever the case and padding.
        #[test]
        fn normalization_is_case_and_padding_insensitive(s in "[A-Za-z]{3}", pad in " {0,3}") {
            let padded = format!("{pad}{s}{pad}");
            let upper = s.to_ascii_uppercase();
            prop_assert_eq!(
                GateCode::parse_normalized(&padded),
                GateCode::parse(&upper)
            );
        }

        /// Anything that isn't exactly three characters is rejected.
        #[test]
        fn length_mismatch_rejected(s in "[A-Z]{0,2}|[A-Z]{4,8}") {
            prop_assert!(GateCode::parse(&s).is_err());
            prop_assert!(GateCode::parse_normalized(&s).is_err());
        }

        /// A single non-letter anywhere in the code poisons it.
        #[test]
        fn non_letters_rejected(
            prefix in "[A-Z]{0,2}",
            bad in "[0-9_.!-]",
        ) {
            let mut s = prefix.clone();
            s.push_str(&bad);
            while s.len() < 3 {
                s.push('A');
            }
            prop_assert!(GateCode::parse(&s).is_err());
        }

        /// Parsed codes compare exactly like their string forms, which is
        /// what keeps gate listings in code order.
        #[test]
        fn ordering_agrees_with_strings(a in "[A-Z]{3}", b in "[A-Z]{3}") {
            let ca = GateCode::parse(&a).unwrap();
            let cb = GateCode::parse(&b).unwrap();
            prop_assert_eq!(ca.cmp(&cb), a.cmp(&b));
        }
    }
}
