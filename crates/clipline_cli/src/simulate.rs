//! Headless timeline stepping
//!
//! Advances a configured timeline tick by tick and turns each new state into
//! a report: the numbers a renderer would read to place things on screen.

use anyhow::Result;
use clipline_core::{interpolate_point, interpolate_point_clamped, Point2};
use clipline_timeline::{TimeStatus, TimelineWorld};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::config::ClipConfig;

/// Stepping settings, after command-line overrides
#[derive(Clone, Copy, Debug)]
pub struct SimulationOptions {
    pub delta: f64,
    pub max_ticks: u64,
}

impl SimulationOptions {
    pub fn from_config(config: &ClipConfig) -> Self {
        Self {
            delta: config.timeline.delta,
            max_ticks: config.timeline.max_ticks,
        }
    }
}

/// State of one section after a tick
#[derive(Clone, Debug, Serialize)]
pub struct SectionReport {
    pub index: usize,
    pub label: String,
    pub status: TimeStatus,
    pub run_time: Option<f64>,
    pub run_count: Option<u64>,
    pub progress: Option<f64>,
    pub position: Option<Point2>,
}

/// State of the timeline after a tick
#[derive(Clone, Debug, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub status: TimeStatus,
    pub run_time: Option<f64>,
    pub run_count: Option<u64>,
    pub sections: Vec<SectionReport>,
}

/// Outcome of a whole run
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u64,
    pub completed: bool,
}

fn status_label(status: TimeStatus) -> &'static str {
    match status {
        TimeStatus::NotStarted => "not-started",
        TimeStatus::Running => "running",
        TimeStatus::Completed => "completed",
    }
}

fn fmt_opt<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {:>5}  {:<11} time={} count={}",
            self.tick,
            status_label(self.status),
            fmt_opt(self.run_time.map(|t| format!("{t:.2}"))),
            fmt_opt(self.run_count),
        )?;
        for section in &self.sections {
            write!(
                f,
                "\n  {:<10} {:<11} time={} count={} progress={}",
                section.label,
                status_label(section.status),
                fmt_opt(section.run_time.map(|t| format!("{t:.2}"))),
                fmt_opt(section.run_count),
                fmt_opt(section.progress.map(|p| format!("{p:.3}"))),
            )?;
            if let Some([x, y]) = section.position {
                write!(f, " position=({x:.1}, {y:.1})")?;
            }
        }
        Ok(())
    }
}

fn report(config: &ClipConfig, world: &TimelineWorld, tick: u64) -> TickReport {
    let state = world.state();
    let sections = config
        .sections
        .iter()
        .zip(state.sections())
        .enumerate()
        .map(|(index, (section_config, section))| {
            let progress = if section_config.clamp {
                world.progress_clamped(index).ok()
            } else {
                world.progress(index).ok()
            };
            let position = match (section_config.from, section_config.to, progress) {
                (Some(from), Some(to), Some(t)) if section_config.clamp => {
                    Some(interpolate_point_clamped(from, to, t))
                }
                (Some(from), Some(to), Some(t)) => Some(interpolate_point(from, to, t)),
                _ => None,
            };

            SectionReport {
                index,
                label: section_config.label(index),
                status: section.status(),
                run_time: section.run_time(),
                run_count: section.run_count(),
                progress,
                position,
            }
        })
        .collect();

    TickReport {
        tick,
        status: state.status(),
        run_time: state.run_time(),
        run_count: state.run_count(),
        sections,
    }
}

/// Step the configured timeline until it completes or `max_ticks` is
/// reached, handing every changed state to `sink`.
pub fn run<F>(config: &ClipConfig, options: SimulationOptions, mut sink: F) -> Result<Summary>
where
    F: FnMut(&TickReport) -> Result<()>,
{
    let mut world = TimelineWorld::new(config.params()?);
    info!(
        name = %config.timeline.name,
        sections = world.params().len(),
        delta = options.delta,
        "simulating timeline"
    );

    let mut tick = 0;
    while tick < options.max_ticks && !world.is_completed() {
        tick += 1;
        if !world.advance(options.delta)? {
            debug!(tick, "no change");
            continue;
        }
        sink(&report(config, &world, tick))?;
    }

    let summary = Summary {
        ticks: tick,
        completed: world.is_completed(),
    };
    info!(ticks = summary.ticks, completed = summary.completed, "simulation finished");
    Ok(summary)
}
