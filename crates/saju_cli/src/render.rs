//! Plain-text rendering of results.

use anyhow::{Context, Result};
use saju_base::{FourPillars, SajuResult, SamsaeWindow};
use saju_time::JeolEvent;

pub fn print_pillars(pillars: &FourPillars) {
    for (position, ganji) in pillars.iter() {
        println!("{}  {}", position.name(), ganji.label());
    }
}

pub fn print_samsae(samsae: &SamsaeWindow) {
    let [deul, nul, nal] = samsae.window;
    println!(
        "Birth branch {} ({}), window {}{}{}",
        samsae.birth_branch.hanja(),
        samsae.birth_branch.animal(),
        deul.hanja(),
        nul.hanja(),
        nal.hanja()
    );
    for y in &samsae.years {
        println!(
            "  {} {}  {} ({})",
            y.year,
            y.branch.hanja(),
            y.phase.name(),
            y.phase.english_name()
        );
    }
}

pub fn print_solar_terms(events: &[JeolEvent], offset_minutes: i32) -> Result<()> {
    for e in events {
        let civil = e
            .civil(offset_minutes)
            .with_context(|| format!("no civil time for {}", e.jeol.name()))?;
        println!(
            "{} {}({})  {:>6.1} deg  {}",
            civil,
            e.jeol.name(),
            e.jeol.hanja(),
            e.jeol.longitude_deg(),
            e.jd_ut
        );
    }
    Ok(())
}

pub fn print_chart(r: &SajuResult) {
    println!("Saju year {} (solar longitude {:.2} deg)", r.saju_year, r.solar_longitude_deg);
    println!();
    println!("Pillars:");
    for d in &r.details {
        println!(
            "  {}  {}  stem {:<4} branch {:<4} stage {}",
            d.position.name(),
            d.label,
            d.stem_ten_god.name(),
            d.branch_ten_god.name(),
            d.twelve_stage.name()
        );
    }

    println!();
    println!("Elements:");
    for (element, count) in r.elements.iter() {
        println!("  {}({})  {:>4.1}", element.name(), element.hanja(), count);
    }
    let b = &r.element_balance;
    let missing: Vec<&str> = b.missing.iter().map(|e| e.name()).collect();
    println!(
        "  strongest {}, weakest {}, missing [{}]",
        b.strongest.name(),
        b.weakest.name(),
        missing.join(", ")
    );

    println!();
    println!(
        "Day master {} {}",
        r.day_master.stem.hanja(),
        r.day_master.metaphor
    );
    println!("  {}", r.day_master.traits);
    println!("  {}", r.day_master.advice);
    println!("Social mask score: {}", r.social_mask_score);

    println!();
    if r.shinsal.is_empty() {
        println!("Shinsal: none");
    } else {
        let hits: Vec<String> = r
            .shinsal
            .iter()
            .map(|h| format!("{} x{}", h.kind.name(), h.count))
            .collect();
        println!("Shinsal: {}", hits.join(", "));
    }
    let found: Vec<&str> = r.nobleman.found.iter().map(|b| b.hanja()).collect();
    println!(
        "Nobleman: {} (targets {}{})",
        if r.nobleman.has_nobleman {
            found.join("")
        } else {
            "none".to_string()
        },
        r.nobleman.targets[0].hanja(),
        r.nobleman.targets[1].hanja()
    );

    println!();
    println!(
        "Daewoon ({}, from age {}):",
        r.daewoon.direction.name(),
        r.daewoon.start_age
    );
    for c in &r.daewoon.cycles {
        println!(
            "  {:>3}  {}  {:<4} {}",
            c.start_age,
            c.ganji.label(),
            c.ten_god.name(),
            c.twelve_stage.name()
        );
    }

    println!();
    println!("Samsae:");
    print_samsae(&r.samsae);
}
