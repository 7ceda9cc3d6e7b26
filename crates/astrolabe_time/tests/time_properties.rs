//! Property and golden-value tests for the civil-time layer.

use astrolabe_time::{
    CivilDate, DELTA_T_FALLBACK_S, Era, Instant, J2000_JD, ProviderWindow, SECONDS_PER_DAY,
    TimeScale, centuries_since_j2000, delta_t_seconds, greenwich_mean_sidereal_time_deg,
    julian_day_tt, julian_day_ut,
};
use proptest::prelude::*;

#[test]
fn j2000_is_zero_centuries() {
    let jd = julian_day_ut(&Instant::parse("2000-01-01", "12:00").unwrap());
    assert!((jd.value() - J2000_JD).abs() < 1e-9);
    assert_eq!(jd.centuries_since_j2000(), 0.0);
}

#[test]
fn vernal_equinox_2024_noon() {
    let jd = julian_day_ut(&Instant::parse("2024-03-20", "12:00").unwrap());
    assert!((jd.value() - 2_460_390.0).abs() < 1e-9, "jd = {}", jd.value());
}

#[test]
fn scenario_1984_tt_offset() {
    let i = Instant::parse("1984-08-18", "08:03:00").unwrap();
    let tt = julian_day_tt(&i);
    assert_eq!(tt.scale(), TimeScale::Tt);
    assert!((tt.value() - 2_445_930.836_039_406).abs() < 1e-8, "jd_tt = {}", tt.value());
    assert!((delta_t_seconds(1984) - 53.804_708_853_76).abs() < 1e-6);
}

#[test]
fn bce_chart_instant_end_to_end() {
    let i = Instant::parse("bc 0044-Mar-15", "12:00").unwrap();
    assert_eq!(i.date().era(), Era::Bce);

    let ut = julian_day_ut(&i);
    let tt = julian_day_tt(&i);
    let dt_s = (tt.value() - ut.value()) * SECONDS_PER_DAY;
    assert!((dt_s - DELTA_T_FALLBACK_S).abs() < 1e-4, "dt = {dt_s}");

    let w = ProviderWindow::one_minute(&i).unwrap();
    assert_eq!(w.start, "bc 0044-Mar-15 12:00");
    assert_eq!(w.stop, "bc 0044-Mar-15 12:01");
}

#[test]
fn malformed_inputs_name_their_field() {
    assert_eq!(Instant::parse("1984/08/18", "08:03").unwrap_err().field(), "date");
    assert_eq!(Instant::parse("1984-08-18", "eight").unwrap_err().field(), "time");
    assert_eq!(Instant::parse("1984-08-18", "25:00").unwrap_err().field(), "hour");
    assert_eq!(Instant::parse("bc 0000-Jan-01", "00:00").unwrap_err().field(), "year");
}

fn ad_instant() -> impl Strategy<Value = Instant> {
    (1u32..=9999, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0.0f64..60.0).prop_map(
        |(y, mo, d, h, mi, s)| {
            let date = CivilDate::ad(y as i32, mo, d).unwrap();
            Instant::new(date, h, mi, s).unwrap()
        },
    )
}

proptest! {
    #[test]
    fn centuries_strictly_increasing(a in 0.0f64..5.0e6, step in 1.0e-3f64..1.0e5) {
        prop_assert!(centuries_since_j2000(a + step) > centuries_since_j2000(a));
    }

    #[test]
    fn next_day_is_one_julian_day_later(i in ad_instant()) {
        let today = julian_day_ut(&i).value();
        let naive = i.to_naive().unwrap() + chrono::Duration::days(1);
        let tomorrow = julian_day_ut(&Instant::from_naive(naive).unwrap()).value();
        prop_assert!((tomorrow - today - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tt_offset_matches_delta_t(i in ad_instant()) {
        let dt_s = (julian_day_tt(&i).value() - julian_day_ut(&i).value()) * SECONDS_PER_DAY;
        prop_assert!((dt_s - delta_t_seconds(i.date().astronomical_year())).abs() < 1e-3);
    }

    #[test]
    fn gmst_in_range(jd in 1.0e6f64..3.0e6) {
        let g = greenwich_mean_sidereal_time_deg(jd);
        prop_assert!((0.0..360.0).contains(&g));
    }

    #[test]
    fn bce_window_stop_is_one_minute_later(
        year in 1u32..=4000, month in 1u32..=12, day in 1u32..=28,
        hour in 0u32..24, minute in 0u32..60,
    ) {
        let date = CivilDate::bce(year, month, day).unwrap();
        let w = ProviderWindow::one_minute(&Instant::new(date, hour, minute, 0.0).unwrap()).unwrap();
        let start_total = hour * 60 + minute;
        let (sh, sm) = w.stop.rsplit_once(' ').unwrap().1.split_once(':').unwrap();
        let stop_total = sh.parse::<u32>().unwrap() * 60 + sm.parse::<u32>().unwrap();
        prop_assert_eq!(stop_total, (start_total + 1) % (24 * 60));
        prop_assert!(w.stop.starts_with(&date.to_string()));
    }
}
