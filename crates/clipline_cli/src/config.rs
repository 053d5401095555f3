//! Clipline configuration file handling

use anyhow::{Context, Result};
use clipline_core::Point2;
use clipline_timeline::{RunType, SectionDescriptor, TimelineParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up when a directory is given
pub const CONFIG_FILE: &str = "clipline.toml";

/// Top-level configuration (clipline.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct ClipConfig {
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

/// How the timeline is stepped
#[derive(Debug, Deserialize, Serialize)]
pub struct TimelineConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Time added per tick
    #[serde(default = "default_delta")]
    pub delta: f64,
    /// Stop after this many ticks even if not completed
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
}

fn default_name() -> String {
    "timeline".to_string()
}

fn default_delta() -> f64 {
    1000.0 / 60.0
}

fn default_max_ticks() -> u64 {
    3600
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            delta: default_delta(),
            max_ticks: default_max_ticks(),
        }
    }
}

/// One section and, optionally, the points it moves between
#[derive(Debug, Deserialize, Serialize)]
pub struct SectionConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub run_type: RunType,
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub from: Option<Point2>,
    #[serde(default)]
    pub to: Option<Point2>,
    /// Clamp progress to [0, 1] before interpolating
    #[serde(default = "default_true")]
    pub clamp: bool,
}

fn default_true() -> bool {
    true
}

impl SectionConfig {
    pub fn descriptor(&self) -> SectionDescriptor {
        SectionDescriptor {
            run_type: self.run_type,
            start: self.start,
            end: self.end,
        }
    }

    /// Label used in reports
    pub fn label(&self, index: usize) -> String {
        self.name.clone().unwrap_or_else(|| format!("#{index}"))
    }
}

impl ClipConfig {
    /// Load configuration from a file, or from `clipline.toml` in a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `clipline init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ClipConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check stepping settings and section bounds
    pub fn validate(&self) -> Result<()> {
        if !self.timeline.delta.is_finite() || self.timeline.delta <= 0.0 {
            anyhow::bail!("timeline.delta must be a positive number, got {}", self.timeline.delta);
        }
        self.params()?;
        Ok(())
    }

    /// Validated timeline params for the configured sections
    pub fn params(&self) -> Result<TimelineParams> {
        let descriptors: Vec<_> = self.sections.iter().map(SectionConfig::descriptor).collect();
        TimelineParams::create(&descriptors).context("Invalid section bounds")
    }

    /// Sample configuration: two characters moving along staggered sections
    /// and a text reveal counted in frames
    pub fn sample() -> Self {
        Self {
            timeline: TimelineConfig {
                name: "sample".to_string(),
                ..TimelineConfig::default()
            },
            sections: vec![
                SectionConfig {
                    name: Some("bluford".to_string()),
                    run_type: RunType::ByTime,
                    start: 1000.0,
                    end: 2000.0,
                    from: Some([0.0, 0.0]),
                    to: Some([100.0, 100.0]),
                    clamp: true,
                },
                SectionConfig {
                    name: Some("redmond".to_string()),
                    run_type: RunType::ByTime,
                    start: 1250.0,
                    end: 2250.0,
                    from: Some([0.0, 0.0]),
                    to: Some([100.0, 0.0]),
                    clamp: true,
                },
                SectionConfig {
                    name: Some("dialog".to_string()),
                    run_type: RunType::ByCount,
                    start: 60.0,
                    end: 72.0,
                    from: None,
                    to: None,
                    clamp: true,
                },
            ],
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = ClipConfig::from_toml(
            r#"
            [[sections]]
            start = 0.0
            end = 1.0
            "#,
        )
        .unwrap();

        assert_eq!(config.timeline.name, "timeline");
        assert_eq!(config.timeline.max_ticks, 3600);
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].run_type, RunType::ByTime);
        assert!(config.sections[0].clamp);
        assert!(config.sections[0].from.is_none());
    }

    #[test]
    fn test_full_section() {
        let config = ClipConfig::from_toml(
            r#"
            [timeline]
            name = "reveal"
            delta = 1.0
            max_ticks = 10

            [[sections]]
            name = "dialog"
            run_type = "by_count"
            start = 2.0
            end = 6.0
            from = [0.0, 10.0]
            to = [5.0, 10.0]
            clamp = false
            "#,
        )
        .unwrap();

        let section = &config.sections[0];
        assert_eq!(section.label(0), "dialog");
        assert_eq!(section.run_type, RunType::ByCount);
        assert_eq!(section.to, Some([5.0, 10.0]));
        assert!(!section.clamp);
        assert_eq!(config.params().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let err = ClipConfig::from_toml(
            r#"
            [[sections]]
            start = 5.0
            end = 1.0
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("index 0"));
    }

    #[test]
    fn test_invalid_delta_rejected() {
        assert!(ClipConfig::from_toml("[timeline]\ndelta = 0.0\n").is_err());
        assert!(ClipConfig::from_toml("[timeline]\ndelta = -1.0\n").is_err());
    }

    #[test]
    fn test_sample_round_trips_through_toml() {
        let text = ClipConfig::sample().to_toml().unwrap();
        let config = ClipConfig::from_toml(&text).unwrap();
        assert_eq!(config.sections.len(), 3);
        assert_eq!(config.sections[2].run_type, RunType::ByCount);
    }
}
