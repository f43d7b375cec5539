use crate::constants::SKILL_PCT_MAX;

/// Percentage from a `data-pct` attribute.
///
/// Takes the leading digits (so `"85%"` reads as 85), clamps to 100 and
/// falls back to 0 for anything missing or non-numeric.
pub fn parse_percent(raw: Option<&str>) -> u8 {
    let Some(raw) = raw else {
        return 0;
    };
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u32>() {
        Ok(v) => v.min(SKILL_PCT_MAX as u32) as u8,
        // overflow still means "more than 100"
        Err(_) if !digits.is_empty() => SKILL_PCT_MAX,
        Err(_) => 0,
    }
}

#[inline]
pub fn bar_width(pct: u8) -> String {
    format!("{}%", pct.min(SKILL_PCT_MAX))
}

/// SVG `stroke-dasharray` for a radial gauge drawn on a 100-unit circumference.
#[inline]
pub fn radial_dasharray(pct: u8) -> String {
    format!("{},100", pct.min(SKILL_PCT_MAX))
}
