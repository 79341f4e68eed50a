//! Typed per-kind widget configuration.
//!
//! Each widget kind carries a configuration struct with named fields and
//! explicit defaults matching the registry's default-config template, in
//! place of the free-form key/value map the record store speaks. Configs
//! serialize as the bare JSON object (no tag; the widget's `kind` field
//! already says which shape to expect) and are decoded *by kind* through
//! [`WidgetConfig::from_kind_value`], so a malformed body is a validation
//! error at the boundary instead of a missing-key surprise at render time.
//!
//! Every config embeds a flattened [`StyleConfig`]: the shared style
//! wrapper (background fill, border, corner radius, padding) applied by the
//! renderer's framing step before the kind-specific layout runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::registry::WidgetKind;

// =============================================================
// Shared style wrapper
// =============================================================

/// Style wrapper fields shared by all widget kinds.
///
/// `padding` and `border_width` shrink the interior box available to the
/// kind-specific layout by `2 * (padding + border_width)` per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Background fill as a CSS color, or none for a transparent body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    /// Opacity applied to the background fill only, independent of the
    /// widget's own opacity.
    pub bg_opacity: f64,
    /// Border color; no border is drawn when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub border_width: f64,
    pub border_radius: f64,
    pub padding: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            bg_color: None,
            bg_opacity: 1.0,
            border_color: None,
            border_width: 0.0,
            border_radius: 0.0,
            padding: 0.0,
        }
    }
}

// =============================================================
// Small config vocab enums
// =============================================================

/// Row/cell arrangement for multi-cell widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Horizontal,
    Vertical,
    /// Pick horizontal or vertical from the box's aspect ratio.
    Auto,
}

/// How image content maps onto its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    #[default]
    Contain,
    Cover,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    #[default]
    Bold,
}

/// Timer direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    #[default]
    Elapsed,
    Countdown,
}

// =============================================================
// Per-kind configs
// =============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HuntTableConfig {
    pub show_bet: bool,
    pub show_cost: bool,
    pub show_result: bool,
    pub show_multiplier: bool,
    pub auto_scroll: bool,
    /// Scroll speed in pixels per second.
    pub scroll_speed: f64,
    pub font_size: f64,
    pub max_rows: usize,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for HuntTableConfig {
    fn default() -> Self {
        Self {
            show_bet: true,
            show_cost: true,
            show_result: true,
            show_multiplier: true,
            auto_scroll: true,
            scroll_speed: 30.0,
            font_size: 14.0,
            max_rows: 20,
            style: StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentGameConfig {
    pub show_provider: bool,
    pub show_bet: bool,
    pub show_image: bool,
    /// Show RTP / volatility / max-win metadata when available.
    pub show_info: bool,
    /// Show the personal-record row when available.
    pub show_record: bool,
    pub font_size: f64,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for CurrentGameConfig {
    fn default() -> Self {
        Self {
            show_provider: true,
            show_bet: true,
            show_image: true,
            show_info: true,
            show_record: true,
            font_size: 20.0,
            style: StyleConfig {
                bg_color: Some("#000000".to_owned()),
                bg_opacity: 0.7,
                border_radius: 12.0,
                ..StyleConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiggestWinConfig {
    pub show_game: bool,
    pub font_size: f64,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for BiggestWinConfig {
    fn default() -> Self {
        Self { show_game: true, font_size: 28.0, style: StyleConfig::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunningTotalsConfig {
    pub layout: LayoutMode,
    pub show_profit: bool,
    pub show_avg: bool,
    pub font_size: f64,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for RunningTotalsConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Horizontal,
            show_profit: true,
            show_avg: true,
            font_size: 16.0,
            style: StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressBarConfig {
    pub show_label: bool,
    pub show_count: bool,
    pub bar_color: String,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            show_label: true,
            show_count: true,
            bar_color: "#ef4444".to_owned(),
            style: StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NextUpConfig {
    pub count: usize,
    pub show_bet: bool,
    pub font_size: f64,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for NextUpConfig {
    fn default() -> Self {
        Self { count: 3, show_bet: true, font_size: 14.0, style: StyleConfig::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentResultsConfig {
    pub count: usize,
    pub show_multiplier: bool,
    pub font_size: f64,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for RecentResultsConfig {
    fn default() -> Self {
        Self { count: 5, show_multiplier: true, font_size: 14.0, style: StyleConfig::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardConfig {
    pub count: usize,
    pub font_size: f64,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self { count: 5, font_size: 14.0, style: StyleConfig::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomTextConfig {
    pub text: String,
    pub font_size: f64,
    pub color: String,
    pub font_weight: FontWeight,
    pub align: TextAlign,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for CustomTextConfig {
    fn default() -> Self {
        Self {
            text: "Your text here".to_owned(),
            font_size: 24.0,
            color: "#ffffff".to_owned(),
            font_weight: FontWeight::Bold,
            align: TextAlign::Center,
            style: StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageConfig {
    pub url: String,
    pub fit: FitMode,
    #[serde(flatten)]
    pub style: StyleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerConfig {
    pub mode: TimerMode,
    pub font_size: f64,
    pub color: String,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            mode: TimerMode::Elapsed,
            font_size: 28.0,
            color: "#ffffff".to_owned(),
            style: StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameImageConfig {
    pub fit: FitMode,
    pub show_name: bool,
    #[serde(flatten)]
    pub style: StyleConfig,
}

impl Default for GameImageConfig {
    fn default() -> Self {
        Self { fit: FitMode::Contain, show_name: false, style: StyleConfig::default() }
    }
}

// =============================================================
// Sum type
// =============================================================

/// Configuration payload for a widget, one variant per kind.
///
/// Serializes as the bare config object. Deserialization goes through
/// [`WidgetConfig::from_kind_value`] because the object alone does not say
/// which kind it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WidgetConfig {
    HuntTable(HuntTableConfig),
    CurrentGame(CurrentGameConfig),
    BiggestWin(BiggestWinConfig),
    RunningTotals(RunningTotalsConfig),
    ProgressBar(ProgressBarConfig),
    NextUp(NextUpConfig),
    RecentResults(RecentResultsConfig),
    Leaderboard(LeaderboardConfig),
    CustomText(CustomTextConfig),
    Image(ImageConfig),
    Timer(TimerConfig),
    GameImage(GameImageConfig),
}

impl WidgetConfig {
    /// The kind this config belongs to.
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::HuntTable(_) => WidgetKind::HuntTable,
            Self::CurrentGame(_) => WidgetKind::CurrentGame,
            Self::BiggestWin(_) => WidgetKind::BiggestWin,
            Self::RunningTotals(_) => WidgetKind::RunningTotals,
            Self::ProgressBar(_) => WidgetKind::ProgressBar,
            Self::NextUp(_) => WidgetKind::NextUp,
            Self::RecentResults(_) => WidgetKind::RecentResults,
            Self::Leaderboard(_) => WidgetKind::Leaderboard,
            Self::CustomText(_) => WidgetKind::CustomText,
            Self::Image(_) => WidgetKind::Image,
            Self::Timer(_) => WidgetKind::Timer,
            Self::GameImage(_) => WidgetKind::GameImage,
        }
    }

    /// The registry default for a kind.
    #[must_use]
    pub fn default_for(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::HuntTable => Self::HuntTable(HuntTableConfig::default()),
            WidgetKind::CurrentGame => Self::CurrentGame(CurrentGameConfig::default()),
            WidgetKind::BiggestWin => Self::BiggestWin(BiggestWinConfig::default()),
            WidgetKind::RunningTotals => Self::RunningTotals(RunningTotalsConfig::default()),
            WidgetKind::ProgressBar => Self::ProgressBar(ProgressBarConfig::default()),
            WidgetKind::NextUp => Self::NextUp(NextUpConfig::default()),
            WidgetKind::RecentResults => Self::RecentResults(RecentResultsConfig::default()),
            WidgetKind::Leaderboard => Self::Leaderboard(LeaderboardConfig::default()),
            WidgetKind::CustomText => Self::CustomText(CustomTextConfig::default()),
            WidgetKind::Image => Self::Image(ImageConfig::default()),
            WidgetKind::Timer => Self::Timer(TimerConfig::default()),
            WidgetKind::GameImage => Self::GameImage(GameImageConfig::default()),
        }
    }

    /// Decode a raw config object for a known kind. Missing keys take
    /// their defaults; wrong-typed values are a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the body does not match the
    /// kind's shape.
    pub fn from_kind_value(kind: WidgetKind, value: serde_json::Value) -> Result<Self, Error> {
        fn decode<T: serde::de::DeserializeOwned>(
            value: serde_json::Value,
            wrap: impl FnOnce(T) -> WidgetConfig,
        ) -> Result<WidgetConfig, Error> {
            serde_json::from_value(value).map(wrap).map_err(|e| Error::bad_payload(&e))
        }

        match kind {
            WidgetKind::HuntTable => decode(value, Self::HuntTable),
            WidgetKind::CurrentGame => decode(value, Self::CurrentGame),
            WidgetKind::BiggestWin => decode(value, Self::BiggestWin),
            WidgetKind::RunningTotals => decode(value, Self::RunningTotals),
            WidgetKind::ProgressBar => decode(value, Self::ProgressBar),
            WidgetKind::NextUp => decode(value, Self::NextUp),
            WidgetKind::RecentResults => decode(value, Self::RecentResults),
            WidgetKind::Leaderboard => decode(value, Self::Leaderboard),
            WidgetKind::CustomText => decode(value, Self::CustomText),
            WidgetKind::Image => decode(value, Self::Image),
            WidgetKind::Timer => decode(value, Self::Timer),
            WidgetKind::GameImage => decode(value, Self::GameImage),
        }
    }

    /// The shared style wrapper for the renderer's framing step.
    #[must_use]
    pub fn style(&self) -> &StyleConfig {
        match self {
            Self::HuntTable(c) => &c.style,
            Self::CurrentGame(c) => &c.style,
            Self::BiggestWin(c) => &c.style,
            Self::RunningTotals(c) => &c.style,
            Self::ProgressBar(c) => &c.style,
            Self::NextUp(c) => &c.style,
            Self::RecentResults(c) => &c.style,
            Self::Leaderboard(c) => &c.style,
            Self::CustomText(c) => &c.style,
            Self::Image(c) => &c.style,
            Self::Timer(c) => &c.style,
            Self::GameImage(c) => &c.style,
        }
    }
}
