//! Zodiac sign and degrees-minutes-seconds decomposition.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees (tropical zodiac). Given a longitude we
//! identify the sign and express the position within it as truncated
//! degrees, arc-minutes and arc-seconds.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::util::normalize_360;

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Modality (quadruplicity) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign for a 0-based index, `None` past 11.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_SIGNS[index as usize])
        } else {
            None
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    /// Fire, Earth, Air, Water repeating from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Cardinal, Fixed, Mutable repeating from Aries.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Traditional ruling planet.
    pub const fn ruler(self) -> &'static str {
        match self {
            Self::Aries | Self::Scorpio => "Mars",
            Self::Taurus | Self::Libra => "Venus",
            Self::Gemini | Self::Virgo => "Mercury",
            Self::Cancer => "Moon",
            Self::Leo => "Sun",
            Self::Sagittarius | Self::Pisces => "Jupiter",
            Self::Capricorn | Self::Aquarius => "Saturn",
        }
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position within a sign, truncated to whole arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// Whole degrees within the sign, 0..=29.
    pub degree: u8,
    /// Arc-minutes, 0..=59.
    pub minutes: u8,
    /// Arc-seconds, 0..=59.
    pub seconds: u8,
}

impl Display for ZodiacPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}°{:02}'{:02}\" {}",
            self.degree, self.minutes, self.seconds, self.sign
        )
    }
}

/// Decompose an ecliptic longitude into sign, degree, minutes and seconds.
///
/// Any finite input is normalized to [0, 360) first. Every component is
/// truncated, never rounded, so 29.99999 degrees stays in the same sign.
/// NaN and infinite longitudes are rejected.
pub fn ecliptic_to_zodiac(lon_deg: f64) -> Result<ZodiacPosition, ChartError> {
    if !lon_deg.is_finite() {
        return Err(ChartError::invalid(
            "ecliptic_longitude",
            format!("{lon_deg} is not a finite angle"),
        ));
    }
    let lon = normalize_360(lon_deg);
    // lon just below 360 can divide to exactly 12.0
    let idx = ((lon / 30.0).floor() as u8).min(11);
    let dms = Dms::from_degrees(lon - idx as f64 * 30.0)?;

    Ok(ZodiacPosition {
        sign: ALL_SIGNS[idx as usize],
        degree: dms.degrees.min(29) as u8,
        minutes: dms.minutes,
        seconds: dms.whole_seconds(),
    })
}

/// A signed angle split into degrees, arc-minutes and arc-seconds.
///
/// The magnitude is carried in `degrees`/`minutes`/`seconds`; `negative`
/// holds the sign so that `-0°30'` survives the split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    /// 0..=59.
    pub minutes: u8,
    /// [0, 60), fractional part kept.
    pub seconds: f64,
}

impl Dms {
    /// Split a finite angle. Fails on NaN, infinities and magnitudes that do
    /// not fit the whole-degree field.
    pub fn from_degrees(deg: f64) -> Result<Self, ChartError> {
        if !deg.is_finite() {
            return Err(ChartError::invalid("angle", format!("{deg} is not a finite angle")));
        }
        let magnitude = deg.abs();
        if magnitude >= u32::MAX as f64 {
            return Err(ChartError::invalid("angle", format!("{deg} is too large to split")));
        }
        let whole = magnitude.trunc();
        let arcmin = (magnitude - whole) * 60.0;
        let minutes = arcmin.trunc().min(59.0);
        // float carry can push the remainder to 60.0
        let seconds = ((arcmin - minutes) * 60.0).clamp(0.0, 59.999_999_999);
        Ok(Self {
            negative: deg < 0.0,
            degrees: whole as u32,
            minutes: minutes as u8,
            seconds,
        })
    }

    /// Back to signed decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        let magnitude = self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative { -magnitude } else { magnitude }
    }

    /// Arc-seconds truncated to a whole number.
    pub fn whole_seconds(&self) -> u8 {
        (self.seconds.floor() as u8).min(59)
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{sign}{}°{:02}'{:06.3}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Shorthand for [`Dms::from_degrees`].
pub fn deg_to_dms(deg: f64) -> Result<Dms, ChartError> {
    Dms::from_degrees(deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leo_sample() {
        let z = ecliptic_to_zodiac(123.456).unwrap();
        assert_eq!(z.sign, ZodiacSign::Leo);
        assert_eq!(z.sign.index(), 4);
        assert_eq!((z.degree, z.minutes, z.seconds), (3, 27, 21));
    }

    #[test]
    fn last_arcsecond_of_pisces() {
        let z = ecliptic_to_zodiac(359.9999).unwrap();
        assert_eq!(z.sign, ZodiacSign::Pisces);
        assert_eq!((z.degree, z.minutes, z.seconds), (29, 59, 59));
    }

    #[test]
    fn exact_boundaries() {
        assert_eq!(ecliptic_to_zodiac(0.0).unwrap().sign, ZodiacSign::Aries);
        assert_eq!(ecliptic_to_zodiac(30.0).unwrap().sign, ZodiacSign::Taurus);
        assert_eq!(ecliptic_to_zodiac(360.0).unwrap().sign, ZodiacSign::Aries);
        assert_eq!(ecliptic_to_zodiac(-0.5).unwrap().sign, ZodiacSign::Pisces);
    }

    #[test]
    fn ascendant_1984_renders() {
        let z = ecliptic_to_zodiac(108.112_932_291_286_13).unwrap();
        assert_eq!(z.sign, ZodiacSign::Cancer);
        assert_eq!(z.to_string(), "18°06'46\" Cancer");
    }

    #[test]
    fn sign_attributes() {
        assert_eq!(ZodiacSign::Aries.element(), Element::Fire);
        assert_eq!(ZodiacSign::Cancer.element(), Element::Water);
        assert_eq!(ZodiacSign::Capricorn.element(), Element::Earth);
        assert_eq!(ZodiacSign::Aquarius.element(), Element::Air);
        assert_eq!(ZodiacSign::Aries.modality(), Modality::Cardinal);
        assert_eq!(ZodiacSign::Leo.modality(), Modality::Fixed);
        assert_eq!(ZodiacSign::Pisces.modality(), Modality::Mutable);
        assert_eq!(ZodiacSign::Leo.ruler(), "Sun");
        assert_eq!(ZodiacSign::Scorpio.ruler(), "Mars");
    }

    #[test]
    fn index_round_trip() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(ZodiacSign::from_index(i as u8), Some(*s));
        }
        assert_eq!(ZodiacSign::from_index(12), None);
    }

    #[test]
    fn zodiac_rejects_non_finite_longitude() {
        for lon in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ecliptic_to_zodiac(lon).unwrap_err();
            assert_eq!(err.field(), "ecliptic_longitude");
        }
    }

    #[test]
    fn dms_basic() {
        let d = deg_to_dms(23.5).unwrap();
        assert!(!d.negative);
        assert_eq!((d.degrees, d.minutes), (23, 30));
        assert!(d.seconds.abs() < 1e-9);
        assert!((d.to_degrees() - 23.5).abs() < 1e-12);
        assert_eq!(d.to_string(), "23°30'00.000\"");
    }

    #[test]
    fn dms_keeps_sign() {
        let d = deg_to_dms(-10.25).unwrap();
        assert!(d.negative);
        assert_eq!((d.degrees, d.minutes), (10, 15));
        assert!((d.to_degrees() + 10.25).abs() < 1e-12);

        let small = deg_to_dms(-0.5).unwrap();
        assert_eq!(small.degrees, 0);
        assert!(small.negative);
        assert_eq!(small.to_string(), "-0°30'00.000\"");
    }

    #[test]
    fn dms_handles_large_angles() {
        let d = deg_to_dms(100_000.75).unwrap();
        assert_eq!((d.degrees, d.minutes), (100_000, 45));
    }

    #[test]
    fn dms_rejects_unrepresentable_angles() {
        for deg in [f64::NAN, f64::INFINITY, -f64::INFINITY, 1e12] {
            assert_eq!(deg_to_dms(deg).unwrap_err().field(), "angle");
        }
    }

    #[test]
    fn whole_seconds_truncate() {
        let d = Dms {
            negative: false,
            degrees: 1,
            minutes: 2,
            seconds: 59.999,
        };
        assert_eq!(d.whole_seconds(), 59);
    }
}
