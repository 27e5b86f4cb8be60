//! SI-prefix unit scaling
//!
//! Values are carried in base units internally and scaled by a
//! power-of-ten prefix only at the display edges.

/// SI prefix enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiPrefix {
    #[default]
    None,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Kilo,
    Mega,
    Giga,
    Tera,
}

impl SiPrefix {
    /// Get the multiplier applied when converting a base-unit value into
    /// this prefix's display units
    pub fn scale_factor(&self) -> f64 {
        match self {
            SiPrefix::None => 1.0,
            SiPrefix::Milli => 1e3,
            SiPrefix::Micro => 1e6,
            SiPrefix::Nano => 1e9,
            SiPrefix::Pico => 1e12,
            SiPrefix::Femto => 1e15,
            SiPrefix::Kilo => 1e-3,
            SiPrefix::Mega => 1e-6,
            SiPrefix::Giga => 1e-9,
            SiPrefix::Tera => 1e-12,
        }
    }

    /// Convert a base-unit value into prefixed display units
    #[inline]
    pub fn scale(&self, val: f64) -> f64 {
        val * self.scale_factor()
    }

    /// Convert a prefixed display value back into base units
    ///
    /// Exact algebraic inverse of [`scale`](Self::scale).
    #[inline]
    pub fn unscale(&self, val: f64) -> f64 {
        val / self.scale_factor()
    }

    /// Display symbol
    ///
    /// Kilo through tera are scale-only and have no symbol in the readouts.
    pub fn symbol(&self) -> &'static str {
        match self {
            SiPrefix::Milli => "m",
            SiPrefix::Micro => "μ",
            SiPrefix::Nano => "n",
            SiPrefix::Pico => "p",
            SiPrefix::Femto => "f",
            _ => "",
        }
    }

    /// ASCII-only symbol variant, safe for plain-text round trips
    pub fn symbol_ascii(&self) -> &'static str {
        match self {
            SiPrefix::Micro => "u",
            _ => self.symbol(),
        }
    }

    /// Parse from a prefix word (case-insensitive) or single-letter symbol
    ///
    /// Single letters keep their case distinction (`m` milli vs `M` mega).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "m" => return Some(SiPrefix::Milli),
            "u" | "μ" => return Some(SiPrefix::Micro),
            "n" => return Some(SiPrefix::Nano),
            "p" => return Some(SiPrefix::Pico),
            "f" => return Some(SiPrefix::Femto),
            "k" => return Some(SiPrefix::Kilo),
            "M" => return Some(SiPrefix::Mega),
            "G" => return Some(SiPrefix::Giga),
            "T" => return Some(SiPrefix::Tera),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "" | "none" => Some(SiPrefix::None),
            "milli" => Some(SiPrefix::Milli),
            "micro" => Some(SiPrefix::Micro),
            "nano" => Some(SiPrefix::Nano),
            "pico" => Some(SiPrefix::Pico),
            "femto" => Some(SiPrefix::Femto),
            "kilo" => Some(SiPrefix::Kilo),
            "mega" => Some(SiPrefix::Mega),
            "giga" => Some(SiPrefix::Giga),
            "tera" => Some(SiPrefix::Tera),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [SiPrefix; 10] = [
        SiPrefix::None,
        SiPrefix::Milli,
        SiPrefix::Micro,
        SiPrefix::Nano,
        SiPrefix::Pico,
        SiPrefix::Femto,
        SiPrefix::Kilo,
        SiPrefix::Mega,
        SiPrefix::Giga,
        SiPrefix::Tera,
    ];

    #[test]
    fn test_scale_factors() {
        let val = 3.24;

        assert_eq!(SiPrefix::Milli.scale(val), val * 1e3);
        assert_eq!(SiPrefix::Micro.scale(val), val * 1e6);
        assert_eq!(SiPrefix::Nano.scale(val), val * 1e9);
        assert_eq!(SiPrefix::Pico.scale(val), val * 1e12);
        assert_eq!(SiPrefix::Femto.scale(val), val * 1e15);
        assert_eq!(SiPrefix::Kilo.scale(val), val * 1e-3);
        assert_eq!(SiPrefix::Mega.scale(val), val * 1e-6);
        assert_eq!(SiPrefix::Giga.scale(val), val * 1e-9);
        assert_eq!(SiPrefix::Tera.scale(val), val * 1e-12);
        assert_eq!(SiPrefix::None.scale(val), val);
    }

    #[test]
    fn test_unscale_inverts_scale() {
        let vals = [3.24, -17.5, 1e-13, 6.02e23];

        for prefix in ALL {
            for val in vals {
                assert_relative_eq!(
                    prefix.unscale(prefix.scale(val)),
                    val,
                    max_relative = 1e-14
                );
            }
        }
    }

    #[test]
    fn test_symbol() {
        assert_eq!(SiPrefix::Milli.symbol(), "m");
        assert_eq!(SiPrefix::Micro.symbol(), "μ");
        assert_eq!(SiPrefix::Nano.symbol(), "n");
        assert_eq!(SiPrefix::Pico.symbol(), "p");
        assert_eq!(SiPrefix::Femto.symbol(), "f");

        // Scale-only prefixes never render
        assert_eq!(SiPrefix::None.symbol(), "");
        assert_eq!(SiPrefix::Kilo.symbol(), "");
        assert_eq!(SiPrefix::Mega.symbol(), "");
        assert_eq!(SiPrefix::Giga.symbol(), "");
        assert_eq!(SiPrefix::Tera.symbol(), "");
    }

    #[test]
    fn test_symbol_ascii() {
        assert_eq!(SiPrefix::Micro.symbol_ascii(), "u");
        assert_eq!(SiPrefix::Milli.symbol_ascii(), "m");
        assert_eq!(SiPrefix::Giga.symbol_ascii(), "");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(SiPrefix::from_str("femto"), Some(SiPrefix::Femto));
        assert_eq!(SiPrefix::from_str("FEMTO"), Some(SiPrefix::Femto));
        assert_eq!(SiPrefix::from_str("Giga"), Some(SiPrefix::Giga));
        assert_eq!(SiPrefix::from_str(""), Some(SiPrefix::None));
        assert_eq!(SiPrefix::from_str("google"), None);
    }

    #[test]
    fn test_from_str_symbols_keep_case() {
        assert_eq!(SiPrefix::from_str("m"), Some(SiPrefix::Milli));
        assert_eq!(SiPrefix::from_str("M"), Some(SiPrefix::Mega));
        assert_eq!(SiPrefix::from_str("u"), Some(SiPrefix::Micro));
        assert_eq!(SiPrefix::from_str("μ"), Some(SiPrefix::Micro));
        assert_eq!(SiPrefix::from_str("T"), Some(SiPrefix::Tera));
    }
}
