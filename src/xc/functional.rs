/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Exchange-correlation functional identifiers and classification

use super::errors::{Result, XcError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XcFamily {
    /// Local Density Approximation
    Lda,
    /// Generalized Gradient Approximation
    Gga,
    /// meta-GGA (kinetic energy density dependent)
    MetaGga,
    /// Hybrid GGA (exact-exchange admixture)
    HybridGga,
    /// Hybrid meta-GGA
    HybridMetaGga,
}

impl XcFamily {
    /// All known families
    pub fn all() -> &'static [XcFamily] {
        &[
            XcFamily::Lda,
            XcFamily::Gga,
            XcFamily::MetaGga,
            XcFamily::HybridGga,
            XcFamily::HybridMetaGga,
        ]
    }

    /// The family's prefix in libxc identifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            XcFamily::Lda => "LDA",
            XcFamily::Gga => "GGA",
            XcFamily::MetaGga => "MGGA",
            XcFamily::HybridGga => "HYB_GGA",
            XcFamily::HybridMetaGga => "HYB_MGGA",
        }
    }
}

/// What a functional contributes to the total energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum XcKind {
    /// Exchange only
    Exchange,
    /// Correlation only
    Correlation,
    /// Combined exchange and correlation
    ExchangeCorrelation,
    /// Kinetic energy functional
    Kinetic,
}

impl XcKind {
    /// All known kinds
    pub fn all() -> &'static [XcKind] {
        &[
            XcKind::Exchange,
            XcKind::Correlation,
            XcKind::ExchangeCorrelation,
            XcKind::Kinetic,
        ]
    }

    /// The kind's token in libxc identifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            XcKind::Exchange => "X",
            XcKind::Correlation => "C",
            XcKind::ExchangeCorrelation => "XC",
            XcKind::Kinetic => "K",
        }
    }
}

/// An exchange-correlation functional identifier in the libxc naming scheme
///
/// The identifier encodes the family prefix, the kind token, and the
/// functional name: `LDA_C_HL` is the LDA-family Hedin-Lundqvist
/// correlation functional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XcFunc {
    // LDA family
    LdaX,
    LdaCWigner,
    LdaCVwn,
    LdaCPz,
    LdaCPw,
    LdaCHl,
    LdaXcTeter93,
    LdaKTf,
    // GGA family
    GgaXPbe,
    GgaCPbe,
    GgaXB88,
    GgaCLyp,
    GgaXPw91,
    GgaCPw91,
    GgaXRpbe,
    GgaXcHcth93,
    GgaKApbe,
    // Hybrid GGA family
    HybGgaXcB3lyp,
    HybGgaXcPbeh,
    HybGgaXcHse06,
    // meta-GGA family
    MggaXTpss,
    MggaCTpss,
    MggaXScan,
    MggaCScan,
    MggaXM06L,
    MggaCM06L,
    // Hybrid meta-GGA family
    HybMggaXcTpssh,
    HybMggaXcM05,
}

impl XcFunc {
    /// All registered functionals
    pub fn all() -> &'static [XcFunc] {
        &[
            XcFunc::LdaX,
            XcFunc::LdaCWigner,
            XcFunc::LdaCVwn,
            XcFunc::LdaCPz,
            XcFunc::LdaCPw,
            XcFunc::LdaCHl,
            XcFunc::LdaXcTeter93,
            XcFunc::LdaKTf,
            XcFunc::GgaXPbe,
            XcFunc::GgaCPbe,
            XcFunc::GgaXB88,
            XcFunc::GgaCLyp,
            XcFunc::GgaXPw91,
            XcFunc::GgaCPw91,
            XcFunc::GgaXRpbe,
            XcFunc::GgaXcHcth93,
            XcFunc::GgaKApbe,
            XcFunc::HybGgaXcB3lyp,
            XcFunc::HybGgaXcPbeh,
            XcFunc::HybGgaXcHse06,
            XcFunc::MggaXTpss,
            XcFunc::MggaCTpss,
            XcFunc::MggaXScan,
            XcFunc::MggaCScan,
            XcFunc::MggaXM06L,
            XcFunc::MggaCM06L,
            XcFunc::HybMggaXcTpssh,
            XcFunc::HybMggaXcM05,
        ]
    }

    /// Create a functional identifier from its libxc name
    ///
    /// Matching is case-insensitive: "lda_c_hl" and "LDA_C_HL" both resolve.
    pub fn from_string(name: &str) -> Result<Self> {
        let upper = name.to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|func| func.as_str() == upper)
            .ok_or_else(|| XcError::UnknownFunctional(name.to_string()))
    }

    /// The libxc identifier for this functional
    pub fn as_str(&self) -> &'static str {
        match self {
            XcFunc::LdaX => "LDA_X",
            XcFunc::LdaCWigner => "LDA_C_WIGNER",
            XcFunc::LdaCVwn => "LDA_C_VWN",
            XcFunc::LdaCPz => "LDA_C_PZ",
            XcFunc::LdaCPw => "LDA_C_PW",
            XcFunc::LdaCHl => "LDA_C_HL",
            XcFunc::LdaXcTeter93 => "LDA_XC_TETER93",
            XcFunc::LdaKTf => "LDA_K_TF",
            XcFunc::GgaXPbe => "GGA_X_PBE",
            XcFunc::GgaCPbe => "GGA_C_PBE",
            XcFunc::GgaXB88 => "GGA_X_B88",
            XcFunc::GgaCLyp => "GGA_C_LYP",
            XcFunc::GgaXPw91 => "GGA_X_PW91",
            XcFunc::GgaCPw91 => "GGA_C_PW91",
            XcFunc::GgaXRpbe => "GGA_X_RPBE",
            XcFunc::GgaXcHcth93 => "GGA_XC_HCTH_93",
            XcFunc::GgaKApbe => "GGA_K_APBE",
            XcFunc::HybGgaXcB3lyp => "HYB_GGA_XC_B3LYP",
            XcFunc::HybGgaXcPbeh => "HYB_GGA_XC_PBEH",
            XcFunc::HybGgaXcHse06 => "HYB_GGA_XC_HSE06",
            XcFunc::MggaXTpss => "MGGA_X_TPSS",
            XcFunc::MggaCTpss => "MGGA_C_TPSS",
            XcFunc::MggaXScan => "MGGA_X_SCAN",
            XcFunc::MggaCScan => "MGGA_C_SCAN",
            XcFunc::MggaXM06L => "MGGA_X_M06_L",
            XcFunc::MggaCM06L => "MGGA_C_M06_L",
            XcFunc::HybMggaXcTpssh => "HYB_MGGA_XC_TPSSH",
            XcFunc::HybMggaXcM05 => "HYB_MGGA_XC_M05",
        }
    }

    /// The functional's family, read off the identifier prefix
    pub fn family(&self) -> XcFamily {
        let name = self.as_str();
        if name.starts_with("HYB_MGGA_") {
            XcFamily::HybridMetaGga
        } else if name.starts_with("HYB_GGA_") {
            XcFamily::HybridGga
        } else if name.starts_with("MGGA_") {
            XcFamily::MetaGga
        } else if name.starts_with("GGA_") {
            XcFamily::Gga
        } else {
            XcFamily::Lda
        }
    }

    /// The functional's kind, read off the token after the family prefix
    pub fn kind(&self) -> XcKind {
        let name = self.as_str();
        let rest = name.strip_prefix(self.family().as_str()).unwrap_or(name);
        let rest = rest.strip_prefix('_').unwrap_or(rest);
        match rest.split('_').next() {
            Some("XC") => XcKind::ExchangeCorrelation,
            Some("C") => XcKind::Correlation,
            Some("K") => XcKind::Kinetic,
            _ => XcKind::Exchange,
        }
    }

    /// Whether this functional belongs to the LDA family
    pub fn is_lda_family(&self) -> bool {
        self.family() == XcFamily::Lda
    }

    /// Whether this functional belongs to the GGA family
    pub fn is_gga_family(&self) -> bool {
        self.family() == XcFamily::Gga
    }

    /// Whether this functional belongs to the meta-GGA family
    pub fn is_mgga_family(&self) -> bool {
        self.family() == XcFamily::MetaGga
    }

    /// Whether this functional is a hybrid (GGA or meta-GGA)
    pub fn is_hybrid_family(&self) -> bool {
        matches!(self.family(), XcFamily::HybridGga | XcFamily::HybridMetaGga)
    }

    /// Whether this is an exchange-only functional
    pub fn is_exchange(&self) -> bool {
        self.kind() == XcKind::Exchange
    }

    /// Whether this is a correlation-only functional
    pub fn is_correlation(&self) -> bool {
        self.kind() == XcKind::Correlation
    }

    /// Whether this is a combined exchange-correlation functional
    pub fn is_exchange_correlation(&self) -> bool {
        self.kind() == XcKind::ExchangeCorrelation
    }

    /// Whether this is a kinetic energy functional
    pub fn is_kinetic(&self) -> bool {
        self.kind() == XcKind::Kinetic
    }
}

impl fmt::Display for XcFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let xc = XcFunc::LdaCHl;
        assert!(!xc.is_exchange());
        assert!(xc.is_correlation());
        assert!(!xc.is_exchange_correlation());
        assert!(xc.is_lda_family());
        assert!(!xc.is_gga_family());

        assert!(XcFunc::GgaXPbe.is_exchange());
        assert!(XcFunc::HybGgaXcB3lyp.is_hybrid_family());
        assert!(XcFunc::HybGgaXcB3lyp.is_exchange_correlation());
        assert!(XcFunc::MggaXScan.is_mgga_family());
        assert!(XcFunc::LdaKTf.is_kinetic());
        assert!(XcFunc::GgaKApbe.is_kinetic());
    }

    #[test]
    fn test_registry_membership() {
        for func in XcFunc::all() {
            assert!(XcFamily::all().contains(&func.family()));
            assert!(XcKind::all().contains(&func.kind()));
        }
    }

    #[test]
    fn test_string_round_trip() {
        for func in XcFunc::all() {
            assert_eq!(XcFunc::from_string(func.as_str()).unwrap(), *func);
        }
        assert_eq!(XcFunc::from_string("lda_c_hl").unwrap(), XcFunc::LdaCHl);
        assert!(XcFunc::from_string("LDA_C_NOPE").is_err());
    }
}
