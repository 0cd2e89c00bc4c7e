//! Synchronous subcommands: readouts, calendars, grids and projections.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info_span};

use uls_core::{
    find_anchor, find_scale, theories_with, CalendarKind, ForensicAnchor, ScaleDescriptor,
    TheoryFactor, TheoryId, Uls, FORENSIC_ANCHORS,
};
use uls_time::{
    cell_label, current_uls, format_uls, generate_layered_month, precession_shift_seconds, reform_gap_for,
    render, sidereal_zodiac, trajectory_drift_years, tropical_zodiac, CalendarCell, ClockFace,
    ClockSource, CoordinateSnapshot, GridCell, GridView, ProphecyTrajectory, SystemClock,
};

use crate::cli::{
    AnchorsArgs, GridArgs, InstantArgs, MonthArgs, NowArgs, ProphecyArgs, RenderArgs, ZodiacArgs,
};
use crate::config::UlsConfig;

/// Parse `YYYY-MM-DD` (signed years allowed) as UTC midnight.
pub fn parse_date(text: &str) -> Result<Uls> {
    let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .with_context(|| format!("expected YYYY-MM-DD, got {text:?}"))?;
    Ok(Uls::from_date(date))
}

/// Coordinate named on the command line, or the live one.
pub fn resolve_instant(at: &InstantArgs, theories: &[TheoryFactor]) -> Result<Uls> {
    if let Some(secs) = at.uls {
        if !secs.is_finite() {
            bail!("--uls must be a finite number of seconds");
        }
        return Ok(Uls::from_secs(secs));
    }
    if let Some(date) = &at.date {
        return parse_date(date);
    }
    Ok(current_uls(SystemClock.now(), theories))
}

/// Theory set from `--theory` flags, falling back to the configuration.
pub fn resolve_theories(flags: &[String], config: &UlsConfig) -> Result<Vec<TheoryFactor>> {
    if flags.is_empty() {
        return Ok(config.theory_factors());
    }
    let ids = flags
        .iter()
        .map(|s| s.parse::<TheoryId>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(theories_with(&ids))
}

pub fn run_now(args: NowArgs, config: &UlsConfig) -> Result<()> {
    let _cmd = info_span!("now").entered();
    let theories = resolve_theories(&args.theories, config)?;
    let snapshot = CoordinateSnapshot::capture(&SystemClock, &theories);
    print!("{}", format_snapshot(&snapshot, &theories));
    Ok(())
}

pub fn format_snapshot(snapshot: &CoordinateSnapshot, theories: &[TheoryFactor]) -> String {
    let face = ClockFace::from_uls(snapshot.uls);
    let enabled: Vec<_> = theories.iter().filter(|t| t.enabled).map(|t| t.name).collect();

    let calendars: String = CalendarKind::ALL
        .iter()
        .map(|&kind| format!("{:<11} {}\n", kind.tag(), snapshot.rendered(kind)))
        .collect();
    let theory_line = if enabled.is_empty() {
        "none".to_string()
    } else {
        enabled.join(", ")
    };

    format!(
        "ULS         {}\nUTC         {} {}\n{calendars}Precession  {:.4} deg\n\
         Alpha hand  {:.2} deg\nZodiac      tropical {} / sidereal {}\nTheories    {theory_line}\n",
        format_uls(snapshot.uls),
        snapshot.time.date,
        snapshot.time,
        snapshot.precession_offset,
        face.alpha_angle,
        snapshot.tropical_sign,
        snapshot.sidereal_sign,
    )
}

pub fn run_render(args: RenderArgs, config: &UlsConfig) -> Result<()> {
    let uls = resolve_instant(&args.at, &config.theory_factors())?;
    let kinds = match &args.calendar {
        Some(name) => vec![name.parse::<CalendarKind>()?],
        None => CalendarKind::ALL.to_vec(),
    };
    debug!(uls = uls.0, kinds = kinds.len(), "rendering");
    print!("{}", format_renderings(uls, &kinds));
    Ok(())
}

pub fn format_renderings(uls: Uls, kinds: &[CalendarKind]) -> String {
    let mut out = format!("ULS {}\n", format_uls(uls));
    for &kind in kinds {
        out.push_str(&format!("{} {:<17} {}\n", kind.tag(), kind.as_str(), render(uls, kind)));
    }
    out
}

pub fn run_month(args: MonthArgs, config: &UlsConfig) -> Result<()> {
    let _cmd = info_span!("month", year = args.year, month = args.month).entered();
    if !(1..=12).contains(&args.month) {
        bail!("month must be 1-12, got {}", args.month);
    }
    let month = args.month - 1;
    let show_gaps = config.reform_gaps && !args.no_gaps;
    let cells = generate_layered_month(args.year, month, show_gaps)?;
    print!("{}", format_month(args.year, month, &cells, show_gaps));
    Ok(())
}

/// Weekday grid; gap days carry a `*`, day indices follow underneath.
pub fn format_month(year: i32, month: u32, cells: &[CalendarCell], show_gaps: bool) -> String {
    let mut out = format!("{:04}-{:02}\n Su  Mo  Tu  We  Th  Fr  Sa\n", year, month + 1);
    for week in cells.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell.civil_day {
                None => "    ".to_string(),
                Some(day) => format!("{:>3}{}", day, if cell.is_gap { '*' } else { ' ' }),
            })
            .collect();
        out.push_str(row.concat().trim_end());
        out.push('\n');
    }

    let indices: Vec<i64> = cells.iter().filter_map(|c| c.day_index).collect();
    if let (Some(first), Some(last)) = (indices.first(), indices.last()) {
        out.push_str(&format!("day index {first}..={last}\n"));
    }
    if show_gaps {
        if let Some(gap) = reform_gap_for(year, month) {
            out.push_str(&format!("* removed by {} ({} days)\n", gap.name, gap.removed_days()));
        }
    }
    out
}

pub fn run_zodiac(args: ZodiacArgs) -> Result<()> {
    let uls = parse_date(&args.date)?;
    print!("{}", format_zodiac(uls));
    Ok(())
}

pub fn format_zodiac(uls: Uls) -> String {
    format!(
        "Tropical  {}\nSidereal  {}\nShift     {:.0} s\n",
        tropical_zodiac(uls),
        sidereal_zodiac(uls),
        precession_shift_seconds(uls)
    )
}

pub fn run_grid(args: GridArgs, config: &UlsConfig) -> Result<()> {
    let _cmd = info_span!("grid").entered();
    let scale = match &args.scale {
        Some(id) => find_scale(id)?,
        None => config.scale()?,
    };
    let live = resolve_instant(&args.at, &config.theory_factors())?;

    let mut view = GridView::new(scale);
    view.step(args.step);
    let cells = view.cells(live, FORENSIC_ANCHORS);
    debug!(scale = scale.id, cells = cells.len(), offset = view.offset, "grid built");

    println!("{} view at ULS {}", scale.label, format_uls(view.view_uls(live)));
    print!("{}", format_grid(scale, &cells));
    Ok(())
}

pub fn format_grid(scale: &ScaleDescriptor, cells: &[GridCell<'_>]) -> String {
    let mut out = String::new();
    for (index, cell) in cells.iter().enumerate() {
        let label = cell_label(scale, index, cell);
        out.push_str(&format!("{:>6}  {}", label, cell.uls.civil().date_string()));
        if cell.has_prophecy_link() {
            out.push_str("  [prophecy link]");
        }
        out.push('\n');
        for anchor in &cell.anchors {
            out.push_str(&format!("        - {} ({})", anchor.name, anchor.category.as_str()));
            if let Some(years) = trajectory_drift_years(cell.uls, anchor) {
                out.push_str(&format!(" {years:+.1}y since issue"));
            }
            out.push('\n');
        }
    }
    out
}

pub fn run_anchors(args: AnchorsArgs) -> Result<()> {
    match &args.id {
        Some(id) => print!("{}", format_anchor_detail(find_anchor(id)?)),
        None => {
            for anchor in FORENSIC_ANCHORS {
                println!("{}", format_anchor_row(anchor));
            }
        }
    }
    Ok(())
}

pub fn format_anchor_row(anchor: &ForensicAnchor) -> String {
    format!(
        "{:<24} {:<13} {:>12}  {}",
        anchor.id,
        anchor.category.as_str(),
        anchor.uls.civil().date_string(),
        anchor.name
    )
}

pub fn format_anchor_detail(anchor: &ForensicAnchor) -> String {
    let mut out = format!(
        "{} [{}]\nULS     {}\nCivil   {}\n",
        anchor.name,
        anchor.category.as_str(),
        format_uls(anchor.uls),
        anchor.uls.civil().date_string()
    );
    if let Some(origin) = anchor.origin_uls {
        out.push_str(&format!("Issued  {}\n", origin.civil().date_string()));
    }
    if let Some(lead) = anchor.lead_time_years() {
        out.push_str(&format!("Lead    {lead:.1} tropical years\n"));
    }
    out.push_str(anchor.description);
    out.push('\n');
    out
}

pub fn run_prophecy(args: ProphecyArgs) -> Result<()> {
    if args.duration < 0 {
        bail!("duration must not be negative");
    }
    let current_year = args
        .current_year
        .unwrap_or_else(|| i64::from(Uls::from_datetime(SystemClock.now()).civil().year()));
    let trajectory = ProphecyTrajectory::simulate(args.origin, args.duration, current_year)?;
    print!("{}", format_trajectory(&trajectory));
    Ok(())
}

pub fn format_trajectory(t: &ProphecyTrajectory) -> String {
    format!(
        "Alpha target       {}\nBeta intersection  {}\nDrift              {} days ({:.2} years)\n{}\n",
        t.alpha_target,
        t.beta_intersection,
        t.drift_days,
        t.drift_years,
        t.audit_message()
    )
}
