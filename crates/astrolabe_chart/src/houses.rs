//! House cusp computation for the four supported systems.
//!
//! Every system maps to its own cusp function; the dispatcher in
//! [`compute_house_cusps`] is the only place that knows about all of them.
//!
//! Placidus and Koch here are fast approximations that divide the quadrant
//! arcs in ecliptic longitude. They are not the trigonometric semi-arc
//! constructions and diverge from them at high latitudes.

use crate::angles::ChartAngles;
use crate::error::ChartError;
use crate::house_types::{HouseCusps, HouseSystem};
use crate::util::{arc_forward, normalize_360};

/// Compute the twelve cusps of `system` from the chart angles.
pub fn compute_house_cusps(system: HouseSystem, angles: &ChartAngles) -> HouseCusps {
    let asc = angles.ascendant_deg;
    let mc = angles.midheaven_deg;
    let cusps = match system {
        HouseSystem::Placidus => placidus_cusps(asc, mc),
        HouseSystem::Equal => equal_cusps(asc),
        HouseSystem::WholeSign => whole_sign_cusps(asc),
        HouseSystem::Koch => koch_cusps(asc, mc),
    };
    tracing::debug!(system = system.name(), asc, mc, "computed house cusps");
    HouseCusps { system, cusps }
}

/// Equal houses: `cusp[n] = Asc + 30(n-1)`.
fn equal_cusps(asc: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = normalize_360(asc + 30.0 * i as f64);
    }
    cusps
}

/// Whole-sign houses: 30-degree cusps starting at the sign boundary below
/// the Ascendant.
fn whole_sign_cusps(asc: f64) -> [f64; 12] {
    let start = (normalize_360(asc) / 30.0).floor() * 30.0;
    equal_cusps(start)
}

/// Placidus approximation.
///
/// Cusps 2 and 3 trisect the forward arc Asc to MC; cusps 11 and 12 trisect
/// the forward arc MC to Asc. The rest are antipodes.
fn placidus_cusps(asc: f64, mc: f64) -> [f64; 12] {
    let arc = arc_forward(asc, mc);
    let arc_back = arc_forward(mc, asc);

    let c2 = normalize_360(asc + arc / 3.0);
    let c3 = normalize_360(asc + 2.0 * arc / 3.0);
    let c11 = normalize_360(mc + arc_back / 3.0);
    let c12 = normalize_360(mc + 2.0 * arc_back / 3.0);

    with_antipodes(asc, c2, c3, mc, c11, c12)
}

/// Koch approximation.
///
/// One third of the forward arc Asc to MC is stepped from both the Ascendant
/// (cusps 2, 3) and the MC (cusps 11, 12).
fn koch_cusps(asc: f64, mc: f64) -> [f64; 12] {
    let q = arc_forward(asc, mc) / 3.0;

    let c2 = normalize_360(asc + q);
    let c3 = normalize_360(asc + 2.0 * q);
    let c11 = normalize_360(mc + q);
    let c12 = normalize_360(mc + 2.0 * q);

    with_antipodes(asc, c2, c3, mc, c11, c12)
}

/// Fill the six eastern/upper cusps and derive the other six as antipodes.
fn with_antipodes(c1: f64, c2: f64, c3: f64, c10: f64, c11: f64, c12: f64) -> [f64; 12] {
    let opp = |x: f64| normalize_360(x + 180.0);
    [
        normalize_360(c1),  // 0: house 1 (Asc)
        c2,                 // 1
        c3,                 // 2
        opp(c10),           // 3: house 4 (IC)
        opp(c11),           // 4
        opp(c12),           // 5
        opp(c1),            // 6: house 7 (Desc)
        opp(c2),            // 7
        opp(c3),            // 8
        normalize_360(c10), // 9: house 10 (MC)
        c11,                // 10
        c12,                // 11
    ]
}

/// House number (1-12) containing an ecliptic longitude.
///
/// House `n` spans the forward arc from its cusp to the next cusp. When the
/// approximate quadrant systems produce overlapping arcs, the lowest house
/// number wins.
pub fn house_of_longitude(cusps: &HouseCusps, lon_deg: f64) -> Result<u8, ChartError> {
    if !lon_deg.is_finite() {
        return Err(ChartError::invalid("longitude", format!("{lon_deg} is not finite")));
    }
    let lon = normalize_360(lon_deg);
    let house = (0..12)
        .position(|i| {
            let start = cusps.cusps[i];
            let end = cusps.cusps[(i + 1) % 12];
            arc_forward(start, lon) < arc_forward(start, end)
        })
        // The twelve arcs chain back to cusp 1, so together they cover the
        // circle; this only triggers for a fully degenerate cusp set.
        .unwrap_or(0);
    Ok(house as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angles(asc: f64, mc: f64) -> ChartAngles {
        ChartAngles::from_asc_mc(asc, mc, 0.0, 23.44)
    }

    fn assert_close(actual: f64, expected: f64, what: &str) {
        let diff = arc_forward(expected, actual).min(arc_forward(actual, expected));
        assert!(diff < 1e-9, "{what}: expected {expected}, got {actual}");
    }

    #[test]
    fn equal_from_15() {
        let h = compute_house_cusps(HouseSystem::Equal, &angles(15.0, 280.0));
        for n in 1..=12u8 {
            assert_close(h.cusp(n).unwrap(), 15.0 + 30.0 * (n - 1) as f64, "equal cusp");
        }
    }

    #[test]
    fn equal_ignores_mc() {
        let a = compute_house_cusps(HouseSystem::Equal, &angles(15.0, 280.0));
        let b = compute_house_cusps(HouseSystem::Equal, &angles(15.0, 100.0));
        assert_eq!(a.cusps, b.cusps);
    }

    #[test]
    fn whole_sign_snaps_to_sign_start() {
        let h = compute_house_cusps(HouseSystem::WholeSign, &angles(108.11, 7.69));
        assert_close(h.cusps[0], 90.0, "cusp 1");
        assert_close(h.cusps[11], 60.0, "cusp 12");
        for c in h.cusps {
            assert!((c % 30.0).abs() < 1e-9, "cusp {c} not on a sign boundary");
        }
    }

    #[test]
    fn placidus_1984_layout() {
        let asc = 108.112_932_291;
        let mc = 7.690_071_279;
        let h = compute_house_cusps(HouseSystem::Placidus, &angles(asc, mc));
        let arc = arc_forward(asc, mc);
        let back = arc_forward(mc, asc);
        assert_close(h.cusps[0], asc, "cusp 1");
        assert_close(h.cusps[1], asc + arc / 3.0, "cusp 2");
        assert_close(h.cusps[2], asc + 2.0 * arc / 3.0, "cusp 3");
        assert_close(h.cusps[9], mc, "cusp 10");
        assert_close(h.cusps[10], mc + back / 3.0, "cusp 11");
        assert_close(h.cusps[11], mc + 2.0 * back / 3.0, "cusp 12");
        assert_close(h.cusps[3], mc + 180.0, "cusp 4");
        assert_close(h.cusps[6], asc + 180.0, "cusp 7");
    }

    #[test]
    fn koch_steps_same_third_from_both_angles() {
        let (asc, mc) = (100.0, 10.0);
        let h = compute_house_cusps(HouseSystem::Koch, &angles(asc, mc));
        let q = arc_forward(asc, mc) / 3.0;
        assert_close(h.cusps[1], asc + q, "cusp 2");
        assert_close(h.cusps[2], asc + 2.0 * q, "cusp 3");
        assert_close(h.cusps[10], mc + q, "cusp 11");
        assert_close(h.cusps[11], mc + 2.0 * q, "cusp 12");
    }

    #[test]
    fn antipode_invariants_all_systems() {
        for &system in HouseSystem::all() {
            let h = compute_house_cusps(system, &angles(233.3, 151.7));
            assert_close(h.cusps[3], h.cusps[9] + 180.0, "4 vs 10");
            assert_close(h.cusps[6], h.cusps[0] + 180.0, "7 vs 1");
            for c in h.cusps {
                assert!((0.0..360.0).contains(&c), "{system}: cusp {c} out of range");
            }
        }
    }

    #[test]
    fn house_lookup_equal() {
        let h = compute_house_cusps(HouseSystem::Equal, &angles(15.0, 280.0));
        assert_eq!(house_of_longitude(&h, 15.0).unwrap(), 1);
        assert_eq!(house_of_longitude(&h, 44.999).unwrap(), 1);
        assert_eq!(house_of_longitude(&h, 45.0).unwrap(), 2);
        assert_eq!(house_of_longitude(&h, 0.0).unwrap(), 12);
        assert_eq!(house_of_longitude(&h, 374.0).unwrap(), 12);
        assert_eq!(house_of_longitude(&h, 200.0).unwrap(), 7);
    }

    #[test]
    fn house_lookup_rejects_nan() {
        let h = compute_house_cusps(HouseSystem::Equal, &angles(15.0, 280.0));
        assert_eq!(house_of_longitude(&h, f64::NAN).unwrap_err().field(), "longitude");
    }
}
