//! Widget type catalog: the closed set of widget kinds, their picker
//! metadata, and their default box sizes.
//!
//! The catalog is static and append-only. Kind names on the wire are the
//! kebab-case strings the record store uses (`"hunt-table"`, ...); an
//! unrecognized name fails deserialization and is surfaced as a validation
//! error at the model boundary rather than a silent miss. Default
//! configuration bodies live in [`crate::config`]; this module owns only
//! the kind-level facts shared by the editor's picker and the renderer.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;

/// The kind of a widget. Closed enum; the renderer dispatches on this
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Full scrolling table of games in the current hunt.
    HuntTable,
    /// Summary of the game currently being played, with stats and records.
    CurrentGame,
    /// The highest multiplier result so far.
    BiggestWin,
    /// Cost / won / profit / average multiplier readouts.
    RunningTotals,
    /// How many bonuses have been opened, as a linear fill.
    ProgressBar,
    /// The next few games to be played.
    NextUp,
    /// The last few completed entries.
    RecentResults,
    /// Top multiplier results, ranked.
    Leaderboard,
    /// Static text with custom styling.
    CustomText,
    /// An image from a URL.
    Image,
    /// Countdown or elapsed timer.
    Timer,
    /// Image of the currently playing game.
    GameImage,
}

/// Picker grouping. No behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Widgets fed by live hunt session data.
    Hunt,
    /// Static display widgets.
    Display,
    /// Media widgets.
    Media,
}

/// Static facts about a widget kind.
#[derive(Debug, Clone, Copy)]
pub struct WidgetDef {
    pub label: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub default_width: f64,
    pub default_height: f64,
}

impl WidgetKind {
    /// Every kind, in picker order.
    pub const ALL: [Self; 12] = [
        Self::HuntTable,
        Self::CurrentGame,
        Self::BiggestWin,
        Self::RunningTotals,
        Self::ProgressBar,
        Self::NextUp,
        Self::RecentResults,
        Self::Leaderboard,
        Self::CustomText,
        Self::Image,
        Self::Timer,
        Self::GameImage,
    ];

    /// Static catalog entry for this kind.
    #[must_use]
    pub fn def(self) -> &'static WidgetDef {
        match self {
            Self::HuntTable => &WidgetDef {
                label: "Hunt Table",
                description: "Full list of games in the current hunt",
                category: Category::Hunt,
                default_width: 600.0,
                default_height: 400.0,
            },
            Self::CurrentGame => &WidgetDef {
                label: "Currently Playing",
                description: "Game info, stats & personal record",
                category: Category::Hunt,
                default_width: 650.0,
                default_height: 140.0,
            },
            Self::BiggestWin => &WidgetDef {
                label: "Biggest Win",
                description: "The highest multiplier result so far",
                category: Category::Hunt,
                default_width: 350.0,
                default_height: 120.0,
            },
            Self::RunningTotals => &WidgetDef {
                label: "Running Totals",
                description: "Cost, Won, Profit, Avg Multiplier",
                category: Category::Hunt,
                default_width: 500.0,
                default_height: 80.0,
            },
            Self::ProgressBar => &WidgetDef {
                label: "Progress Bar",
                description: "How many bonuses have been opened",
                category: Category::Hunt,
                default_width: 400.0,
                default_height: 50.0,
            },
            Self::NextUp => &WidgetDef {
                label: "Next Up",
                description: "The next few games to be played",
                category: Category::Hunt,
                default_width: 350.0,
                default_height: 200.0,
            },
            Self::RecentResults => &WidgetDef {
                label: "Recent Results",
                description: "Last few completed entries",
                category: Category::Hunt,
                default_width: 400.0,
                default_height: 200.0,
            },
            Self::Leaderboard => &WidgetDef {
                label: "Top Wins",
                description: "Top multiplier results ranked",
                category: Category::Hunt,
                default_width: 350.0,
                default_height: 300.0,
            },
            Self::CustomText => &WidgetDef {
                label: "Custom Text",
                description: "Static text with custom styling",
                category: Category::Display,
                default_width: 300.0,
                default_height: 60.0,
            },
            Self::Image => &WidgetDef {
                label: "Image",
                description: "Display an image from URL",
                category: Category::Media,
                default_width: 300.0,
                default_height: 200.0,
            },
            Self::Timer => &WidgetDef {
                label: "Timer",
                description: "Countdown or elapsed timer",
                category: Category::Display,
                default_width: 200.0,
                default_height: 60.0,
            },
            Self::GameImage => &WidgetDef {
                label: "Game Image",
                description: "Image of the currently playing game",
                category: Category::Hunt,
                default_width: 300.0,
                default_height: 200.0,
            },
        }
    }

    /// Default configuration body for this kind.
    #[must_use]
    pub fn default_config(self) -> WidgetConfig {
        WidgetConfig::default_for(self)
    }

    /// Whether this kind renders live hunt data (and therefore degrades to
    /// a placeholder when no hunt is linked).
    #[must_use]
    pub fn needs_hunt_data(self) -> bool {
        self.def().category == Category::Hunt
    }
}
