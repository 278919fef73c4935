//! Golden tests for jeol timing and the Ipchun year boundary.
//!
//! Reference times are the published KST Ipchun moments. The analytic solar
//! theory is good to about a quarter of an hour, so comparisons allow 20 min.

use saju_time::{
    CalendarOptions, CivilTime, Jeol, KST_OFFSET_MINUTES, RawPillar, calendar_to_jd,
    find_longitude_crossing, jeol_terms_for_year, sexagenary_chart,
};

const TOLERANCE_MIN: f64 = 20.0;

fn ipchun_jd(year: i32) -> f64 {
    find_longitude_crossing(315.0, calendar_to_jd(year, 2, 4.0)).unwrap()
}

fn assert_near(jd: f64, expected: CivilTime) {
    let expected_jd = expected.to_jd_ut(KST_OFFSET_MINUTES);
    let diff_min = (jd - expected_jd).abs() * 1440.0;
    assert!(
        diff_min < TOLERANCE_MIN,
        "expected {expected}, off by {diff_min:.1} min"
    );
}

#[test]
fn ipchun_reference_moments() {
    let cases = [
        (2000, CivilTime::new(2000, 2, 4, 21, 40).unwrap()),
        (2022, CivilTime::new(2022, 2, 4, 5, 51).unwrap()),
        (2023, CivilTime::new(2023, 2, 4, 11, 42).unwrap()),
        (2024, CivilTime::new(2024, 2, 4, 17, 27).unwrap()),
        (2025, CivilTime::new(2025, 2, 3, 23, 10).unwrap()),
    ];
    for (year, expected) in cases {
        assert_near(ipchun_jd(year), expected);
    }
}

#[test]
fn year_pillar_turns_over_at_ipchun() {
    let opts = CalendarOptions::default();
    // 2024 Ipchun ≈ 17:27 KST on Feb 4
    let before = CivilTime::new(2024, 2, 4, 16, 0).unwrap();
    let after = CivilTime::new(2024, 2, 4, 19, 0).unwrap();

    let b = sexagenary_chart(&before, &opts).unwrap();
    let a = sexagenary_chart(&after, &opts).unwrap();

    assert_eq!(b.saju_year, 2023);
    assert_eq!(b.year, RawPillar { stem: 9, branch: 3 }); // 癸卯
    assert_eq!(b.month, RawPillar { stem: 1, branch: 1 }); // 乙丑

    assert_eq!(a.saju_year, 2024);
    assert_eq!(a.year, RawPillar { stem: 0, branch: 4 }); // 甲辰
    assert_eq!(a.month, RawPillar { stem: 2, branch: 2 }); // 丙寅
}

#[test]
fn january_first_is_previous_saju_year() {
    let opts = CalendarOptions::default();
    for year in [1950, 1990, 2010, 2050] {
        let civil = CivilTime::new(year, 1, 1, 12, 0).unwrap();
        let chart = sexagenary_chart(&civil, &opts).unwrap();
        assert_eq!(chart.saju_year, year - 1, "year {year}");
        assert_eq!(chart.month.branch, 0, "January 1 is in the 子 month");
    }
}

#[test]
fn december_stays_in_civil_year() {
    let civil = CivilTime::new(2024, 12, 31, 12, 0).unwrap();
    let chart = sexagenary_chart(&civil, &CalendarOptions::default()).unwrap();
    assert_eq!(chart.saju_year, 2024);
    assert_eq!(chart.month.branch, 0);
}

#[test]
fn month_branch_follows_each_jeol() {
    let opts = CalendarOptions::default();
    for event in jeol_terms_for_year(2024).unwrap() {
        let after = event.civil(KST_OFFSET_MINUTES).unwrap().shifted(60);
        let chart = sexagenary_chart(&after, &opts).unwrap();
        assert_eq!(
            chart.month.branch,
            event.jeol.month_branch_index(),
            "one hour after {}",
            event.jeol.name()
        );
    }
}

#[test]
fn jeol_table_spacing() {
    let events = jeol_terms_for_year(1995).unwrap();
    for w in events.windows(2) {
        let gap = w[1].jd_ut - w[0].jd_ut;
        assert!((29.0..32.5).contains(&gap), "gap {gap} after {:?}", w[0].jeol);
    }
    assert_eq!(events[1].jeol, Jeol::Ipchun);
}

#[test]
fn day_count_is_continuous() {
    let opts = CalendarOptions::default();
    let mut prev: Option<RawPillar> = None;
    for day in 1..=31 {
        let civil = CivilTime::new(2024, 3, day, 12, 0).unwrap();
        let chart = sexagenary_chart(&civil, &opts).unwrap();
        if let Some(p) = prev {
            assert_eq!(chart.day.stem, (p.stem + 1) % 10);
            assert_eq!(chart.day.branch, (p.branch + 1) % 12);
        }
        prev = Some(chart.day);
    }
}

/// Seoul (126.98°E) runs 32 minutes behind the KST meridian.
#[test]
fn seoul_local_mean_time_moves_day_and_hour() {
    let plain = CalendarOptions::default();
    let seoul = CalendarOptions {
        longitude_deg: Some(126.98),
        ..CalendarOptions::default()
    };

    // 00:20 KST on 2000-01-02 is still 23:48 on 2000-01-01 in Seoul.
    let after_midnight = CivilTime::new(2000, 1, 2, 0, 20).unwrap();
    let a = sexagenary_chart(&after_midnight, &plain).unwrap();
    let b = sexagenary_chart(&after_midnight, &seoul).unwrap();
    assert_eq!(a.day, RawPillar { stem: 5, branch: 7 }); // 己未
    assert_eq!(b.day, RawPillar { stem: 4, branch: 6 }); // 戊午, JDN 2451545
    // both in the 子 hour led by 己未's stem
    assert_eq!(a.hour, RawPillar { stem: 0, branch: 0 }); // 甲子
    assert_eq!(b.hour, a.hour);
    assert_eq!(b.month, a.month);
    assert_eq!(b.year, a.year);

    // 13:10 KST is 12:38 local: 午 hour instead of 未.
    let early_afternoon = CivilTime::new(2000, 1, 1, 13, 10).unwrap();
    let a = sexagenary_chart(&early_afternoon, &plain).unwrap();
    let b = sexagenary_chart(&early_afternoon, &seoul).unwrap();
    assert_eq!(a.day, RawPillar { stem: 4, branch: 6 });
    assert_eq!(b.day, a.day);
    assert_eq!(a.hour, RawPillar { stem: 5, branch: 7 }); // 己未
    assert_eq!(b.hour, RawPillar { stem: 4, branch: 6 }); // 戊午
}
