//! Responsive widget rendering: kind + configuration + allotted pixel box
//! + live data in, abstract visual tree out.
//!
//! This module never touches a draw target. It produces [`Visual`] trees
//! that the host (editing preview or public display page) maps onto its
//! surface; parity between the two hosts follows from both calling
//! [`render`]. Every kind shares the same framing step (the style wrapper
//! from [`crate::config::StyleConfig`] shrinks the usable interior box
//! before the kind-specific layout runs) and the same two responsive
//! rules:
//!
//! - **Proportional type**: font sizes scale with the interior box
//!   relative to the kind's registry default size, so one widget stays
//!   legible from thumbnail to fullscreen.
//! - **Monotonic breakpoints**: sub-elements (columns, detail rows, the
//!   provider line) are included only above fixed interior thresholds;
//!   shrinking a box never reveals anything hidden at a larger size.
//!
//! A kind that needs live data and has none renders a labeled
//! [`Visual::Placeholder`], never an error or blank output. No panic
//! escapes [`render`]; an unexpected failure inside a single widget's
//! layout degrades to that widget's placeholder.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::Serialize;

use crate::config::*;
use crate::consts::{MIN_FONT_PX, ROW_GAP_PX, ROW_HEIGHT_FACTOR};
use crate::hunt::{CurrentGame, HuntSummary, format_currency, format_multiplier};
use crate::model::Widget;
use crate::registry::WidgetKind;

// =============================================================
// Visual tree
// =============================================================

/// Bar direction for gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The resolved style wrapper for a widget's outer frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyle {
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    pub bg_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub border_width: f64,
    pub border_radius: f64,
    pub padding: f64,
}

/// A text run with resolved typography.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub text: String,
    pub font_size: f64,
    pub color: String,
    pub bold: bool,
    pub align: TextAlign,
}

impl Label {
    fn new(text: impl Into<String>, font_size: f64, color: &str) -> Self {
        Self {
            text: text.into(),
            font_size,
            color: color.to_owned(),
            bold: false,
            align: TextAlign::Left,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Abstract render output. Hosts walk this tree and draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum Visual {
    /// Style wrapper around a widget's content.
    Frame { style: FrameStyle, child: Box<Visual> },
    /// Vertical stack.
    Column { gap: f64, children: Vec<Visual> },
    /// Horizontal stack.
    Row { gap: f64, children: Vec<Visual> },
    /// A single text run.
    Text(Label),
    /// Linear progress fill.
    Gauge { fraction: f64, orientation: Orientation, color: String },
    /// A looping auto-scroll list. `duration_secs` is `None` for a static
    /// list; `copies` is how many times the row block is repeated so the
    /// loop wraps seamlessly.
    ScrollList {
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_secs: Option<f64>,
        copies: usize,
        gap: f64,
        rows: Vec<Visual>,
    },
    /// Image content.
    Picture { url: String, fit: FitMode },
    /// Host-ticked clock. `label` fixes the typography and the zero text;
    /// the host substitutes elapsed or remaining time per `mode`, formatted
    /// with [`format_clock`].
    Clock { mode: TimerMode, label: Label },
    /// Neutral stand-in for a widget whose data is absent.
    Placeholder { label: String },
}

// =============================================================
// Live data handle
// =============================================================

/// Borrowed view of the latest polled session data.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveData<'a> {
    pub hunt: Option<&'a HuntSummary>,
    pub current_game: Option<&'a CurrentGame>,
}

// =============================================================
// Entry point
// =============================================================

/// Render one widget into a visual tree for its allotted box.
///
/// Infallible by contract: any panic inside a kind layout is caught and
/// degraded to that widget's placeholder, leaving sibling widgets
/// unaffected.
#[must_use]
pub fn render(widget: &Widget, live: &LiveData<'_>) -> Visual {
    catch_unwind(AssertUnwindSafe(|| render_widget(widget, live))).unwrap_or_else(|_| {
        tracing::warn!(widget = %widget.id, kind = ?widget.kind, "widget layout panicked");
        Visual::Placeholder { label: widget.kind.def().label.to_owned() }
    })
}

fn render_widget(widget: &Widget, live: &LiveData<'_>) -> Visual {
    let style = widget.config.style();
    let inset = 2.0 * (style.padding + style.border_width);
    let interior = Box2 {
        w: (widget.width - inset).max(0.0),
        h: (widget.height - inset).max(0.0),
    };
    let scale = type_scale(widget.kind, interior);

    let child = match &widget.config {
        WidgetConfig::HuntTable(cfg) => hunt_table(cfg, interior, scale, live),
        WidgetConfig::CurrentGame(cfg) => current_game(cfg, interior, scale, live),
        WidgetConfig::BiggestWin(cfg) => biggest_win(cfg, interior, scale, live),
        WidgetConfig::RunningTotals(cfg) => running_totals(cfg, interior, scale, live),
        WidgetConfig::ProgressBar(cfg) => progress_bar(cfg, interior, live),
        WidgetConfig::NextUp(cfg) => next_up(cfg, interior, scale, live),
        WidgetConfig::RecentResults(cfg) => recent_results(cfg, interior, scale, live),
        WidgetConfig::Leaderboard(cfg) => leaderboard(cfg, interior, scale, live),
        WidgetConfig::CustomText(cfg) => custom_text(cfg, scale),
        WidgetConfig::Image(cfg) => image(cfg),
        WidgetConfig::Timer(cfg) => timer(cfg, scale),
        WidgetConfig::GameImage(cfg) => game_image(cfg, interior, scale, live),
    };

    Visual::Frame {
        style: FrameStyle {
            width: widget.width,
            height: widget.height,
            bg_color: style.bg_color.clone(),
            bg_opacity: style.bg_opacity,
            border_color: style.border_color.clone(),
            border_width: style.border_width,
            border_radius: style.border_radius,
            padding: style.padding,
        },
        child: Box::new(child),
    }
}

// =============================================================
// Shared layout math
// =============================================================

/// Interior box available to a kind layout, after the frame inset.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Box2 {
    w: f64,
    h: f64,
}

impl Box2 {
    fn aspect(self) -> f64 {
        if self.h <= 0.0 { f64::INFINITY } else { self.w / self.h }
    }
}

/// Proportional scale of this instantiation relative to the kind's
/// registry default box. The tighter axis wins so scaled content cannot
/// overflow; the factor is clamped so degenerate boxes do not zero out
/// or explode the type.
fn type_scale(kind: WidgetKind, interior: Box2) -> f64 {
    let def = kind.def();
    let sx = interior.w / def.default_width;
    let sy = interior.h / def.default_height;
    sx.min(sy).clamp(0.2, 4.0)
}

/// Font size scaled for the box, floored for legibility.
fn scaled_font(base: f64, scale: f64) -> f64 {
    (base * scale).max(MIN_FONT_PX)
}

/// Row height for a list at the given font size.
fn row_height(font: f64) -> f64 {
    font * ROW_HEIGHT_FACTOR
}

/// How many rows of `row_h` separated by `ROW_GAP_PX` fit in `avail`.
fn rows_that_fit(avail: f64, row_h: f64) -> usize {
    if avail <= 0.0 || row_h <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = ((avail + ROW_GAP_PX) / (row_h + ROW_GAP_PX)).floor() as usize;
    n
}

fn placeholder(label: &str) -> Visual {
    Visual::Placeholder { label: label.to_owned() }
}

// Muted/accent palette shared by the hunt widgets.
const TEXT: &str = "#ffffff";
const MUTED: &str = "rgba(255,255,255,0.4)";
const WIN: &str = "#4ade80";
const LOSS: &str = "#f87171";
const GOLD: &str = "#facc15";
const LIVE: &str = "#ef4444";

// =============================================================
// Hunt table
// =============================================================

fn hunt_table(cfg: &HuntTableConfig, interior: Box2, scale: f64, live: &LiveData<'_>) -> Visual {
    let Some(hunt) = live.hunt else {
        return placeholder("Hunt Table");
    };
    if hunt.entries.is_empty() {
        return placeholder("Hunt Table");
    }

    let font = scaled_font(cfg.font_size, scale);
    // Column breakpoints widen with the box; narrower always shows fewer.
    let show_bet = cfg.show_bet && interior.w >= 480.0;
    let show_cost = cfg.show_cost && interior.w >= 240.0;
    let show_result = cfg.show_result && interior.w >= 320.0;
    let show_multiplier = cfg.show_multiplier && interior.w >= 400.0;

    let rows: Vec<Visual> = hunt
        .entries
        .iter()
        .take(cfg.max_rows)
        .enumerate()
        .map(|(i, e)| {
            let mut cells = vec![
                Visual::Text(Label::new(format!("{}", i + 1), font, MUTED)),
                Visual::Text(Label::new(e.game_name.clone(), font, TEXT)),
            ];
            if show_bet {
                cells.push(Visual::Text(Label::new(format_currency(e.bet_size), font, MUTED)));
            }
            if show_cost {
                cells.push(Visual::Text(Label::new(format_currency(e.cost), font, MUTED)));
            }
            if show_result {
                let (text, color) = match e.result {
                    Some(r) => {
                        (format_currency(r), if e.is_win() { WIN } else { LOSS })
                    }
                    None => ("—".to_owned(), MUTED),
                };
                cells.push(Visual::Text(Label::new(text, font, color)));
            }
            if show_multiplier {
                let cell = if e.status == crate::hunt::EntryStatus::Playing {
                    Label::new("LIVE", font, LIVE).bold()
                } else {
                    match e.multiplier {
                        Some(m) => Label::new(format_multiplier(m), font, GOLD),
                        None => Label::new("—", font, MUTED),
                    }
                };
                cells.push(Visual::Text(cell));
            }
            Visual::Row { gap: font * 0.5, children: cells }
        })
        .collect();

    let row_h = row_height(font);
    #[allow(clippy::cast_precision_loss)]
    let list_h = rows.len() as f64 * row_h + (rows.len().saturating_sub(1)) as f64 * ROW_GAP_PX;

    // Seamless loop: repeat the block enough to cover the viewport, plus
    // one extra copy for the wraparound.
    let (duration, copies) = if cfg.auto_scroll && list_h > interior.h && cfg.scroll_speed > 0.0 {
        let duration = (list_h + ROW_GAP_PX) / cfg.scroll_speed;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let copies = (interior.h / list_h).ceil() as usize + 1;
        (Some(duration), copies)
    } else {
        (None, 1)
    };

    Visual::ScrollList { duration_secs: duration, copies, gap: ROW_GAP_PX, rows }
}

// =============================================================
// Current game
// =============================================================

fn current_game(
    cfg: &CurrentGameConfig,
    interior: Box2,
    scale: f64,
    live: &LiveData<'_>,
) -> Visual {
    // Prefer the enriched endpoint payload; fall back to the hunt list's
    // own selection rule.
    let fallback;
    let (name, provider, image, bet) = if let Some(cg) = live.current_game {
        (&cg.game_name, cg.game_provider.as_deref(), cg.game_image.as_deref(), cg.bet_size)
    } else if let Some(entry) = live.hunt.and_then(HuntSummary::current_entry) {
        fallback = entry;
        (
            &fallback.game_name,
            fallback.game_provider.as_deref(),
            fallback.game_image.as_deref(),
            fallback.bet_size,
        )
    } else {
        return placeholder("Currently Playing");
    };

    let font = scaled_font(cfg.font_size, scale);
    let small = scaled_font(cfg.font_size * 0.6, scale);

    let mut headline = vec![Visual::Text(Label::new(name.clone(), font, TEXT).bold())];
    if cfg.show_provider && interior.h >= 60.0 {
        if let Some(p) = provider {
            headline.push(Visual::Text(Label::new(p.to_owned(), small, MUTED)));
        }
    }
    let mut sections = vec![Visual::Column { gap: 2.0, children: headline }];

    if cfg.show_image && interior.w >= 300.0 {
        if let Some(url) = image {
            sections.insert(
                0,
                Visual::Picture { url: url.to_owned(), fit: FitMode::Contain },
            );
        }
    }

    if cfg.show_bet && interior.w >= 360.0 {
        sections.push(Visual::Column {
            gap: 2.0,
            children: vec![
                Visual::Text(Label::new("BET", small, MUTED)),
                Visual::Text(Label::new(format_currency(bet), font * 0.8, TEXT).bold()),
            ],
        });
    }

    if cfg.show_info && interior.w >= 420.0 && interior.h >= 100.0 {
        if let Some(info) = live.current_game.and_then(|cg| cg.info.as_ref()) {
            let mut cells = Vec::new();
            if let Some(ref rtp) = info.rtp {
                cells.push(Visual::Text(Label::new(format!("RTP {rtp}%"), small, MUTED)));
            }
            if let Some(ref vol) = info.volatility {
                cells.push(Visual::Text(Label::new(vol.clone(), small, MUTED)));
            }
            if let Some(ref max) = info.max_win {
                cells.push(Visual::Text(Label::new(format!("Max {max}x"), small, MUTED)));
            }
            if !cells.is_empty() {
                sections.push(Visual::Row { gap: small, children: cells });
            }
        }
    }

    if cfg.show_record && interior.w >= 420.0 && interior.h >= 120.0 {
        if let Some(rec) = live.current_game.and_then(|cg| cg.personal_record.as_ref()) {
            // Stake-specific bests when the store has them, lifetime
            // otherwise.
            let (win, multi) = rec
                .at_current_bet
                .as_ref()
                .map_or((rec.biggest_win, rec.biggest_multiplier), |b| {
                    (b.best_win, b.best_multi)
                });
            sections.push(Visual::Row {
                gap: small,
                children: vec![
                    Visual::Text(Label::new("PB", small, MUTED)),
                    Visual::Text(Label::new(format_currency(win), small, WIN).bold()),
                    Visual::Text(Label::new(format_multiplier(multi), small, GOLD).bold()),
                ],
            });
        }
    }

    // Wide boxes read left-to-right; tall boxes stack.
    if interior.aspect() >= 2.5 {
        Visual::Row { gap: font * 0.75, children: sections }
    } else {
        Visual::Column { gap: font * 0.4, children: sections }
    }
}

// =============================================================
// Biggest win
// =============================================================

fn biggest_win(cfg: &BiggestWinConfig, interior: Box2, scale: f64, live: &LiveData<'_>) -> Visual {
    let Some(best) = live.hunt.and_then(HuntSummary::best_entry) else {
        return placeholder("Biggest Win");
    };
    let font = scaled_font(cfg.font_size, scale);
    let mut children = vec![Visual::Text(
        Label::new(
            format_multiplier(best.multiplier.unwrap_or(0.0)),
            font,
            GOLD,
        )
        .bold()
        .align(TextAlign::Center),
    )];
    if cfg.show_game && interior.h >= 70.0 {
        children.push(Visual::Text(
            Label::new(best.game_name.clone(), font * 0.45, MUTED).align(TextAlign::Center),
        ));
    }
    Visual::Column { gap: 4.0, children }
}

// =============================================================
// Running totals
// =============================================================

fn running_totals(
    cfg: &RunningTotalsConfig,
    interior: Box2,
    scale: f64,
    live: &LiveData<'_>,
) -> Visual {
    let Some(hunt) = live.hunt else {
        return placeholder("Running Totals");
    };

    let horizontal = match cfg.layout {
        LayoutMode::Horizontal => true,
        LayoutMode::Vertical => false,
        LayoutMode::Auto => interior.aspect() >= 1.0,
    };
    let font = scaled_font(cfg.font_size, scale);
    let caption = scaled_font(cfg.font_size * 0.6, scale);

    let cell = |title: &str, value: String, color: &str| Visual::Column {
        gap: 1.0,
        children: vec![
            Visual::Text(Label::new(title.to_owned(), caption, MUTED).align(TextAlign::Center)),
            Visual::Text(Label::new(value, font, color).bold().align(TextAlign::Center)),
        ],
    };

    let mut cells = vec![
        cell("COST", format_currency(hunt.total_cost), TEXT),
        cell("WON", format_currency(hunt.total_won), WIN),
    ];
    // Extra cells appear as the box grows along the layout axis. The auto
    // mode flips orientation with aspect, so its gates take either axis;
    // growing one dimension can then never hide a cell.
    let (profit_room, avg_room) = match cfg.layout {
        LayoutMode::Horizontal => (interior.w >= 280.0, interior.w >= 380.0),
        LayoutMode::Vertical => (interior.h >= 100.0, interior.h >= 130.0),
        LayoutMode::Auto => (
            interior.w >= 280.0 || interior.h >= 100.0,
            interior.w >= 380.0 || interior.h >= 130.0,
        ),
    };
    if cfg.show_profit && profit_room {
        let profit = hunt.profit();
        let text = if profit >= 0.0 {
            format!("+{}", format_currency(profit))
        } else {
            format_currency(profit)
        };
        cells.push(cell("PROFIT", text, if profit >= 0.0 { WIN } else { LOSS }));
    }
    if cfg.show_avg && avg_room {
        cells.push(cell("AVG", format_multiplier(hunt.avg_multiplier()), GOLD));
    }

    if horizontal {
        Visual::Row { gap: font, children: cells }
    } else {
        Visual::Column { gap: font * 0.5, children: cells }
    }
}

// =============================================================
// Progress bar
// =============================================================

fn progress_bar(cfg: &ProgressBarConfig, interior: Box2, live: &LiveData<'_>) -> Visual {
    let Some(hunt) = live.hunt else {
        return placeholder("Progress");
    };
    let total = hunt.entries.len();
    let done = hunt.completed().len();
    #[allow(clippy::cast_precision_loss)]
    let fraction = if total == 0 { 0.0 } else { done as f64 / total as f64 };

    let orientation = if interior.w >= interior.h {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let gauge = Visual::Gauge { fraction, orientation, color: cfg.bar_color.clone() };

    // The caption row needs room on both axes, whatever the bar's
    // orientation, so shrinking either axis can only ever remove it.
    if cfg.show_label && interior.h >= 40.0 && interior.w >= 120.0 {
        let mut caption = vec![Visual::Text(Label::new("Progress", 11.0, MUTED))];
        if cfg.show_count {
            caption.push(Visual::Text(
                Label::new(format!("{done}/{total}"), 11.0, MUTED).align(TextAlign::Right),
            ));
        }
        Visual::Column {
            gap: 4.0,
            children: vec![Visual::Row { gap: 8.0, children: caption }, gauge],
        }
    } else {
        gauge
    }
}

// =============================================================
// Entry lists
// =============================================================

fn next_up(cfg: &NextUpConfig, interior: Box2, scale: f64, live: &LiveData<'_>) -> Visual {
    let Some(hunt) = live.hunt else {
        return placeholder("Next Up");
    };
    let pending = hunt.pending();
    if pending.is_empty() {
        return placeholder("Next Up");
    }

    let font = scaled_font(cfg.font_size, scale);
    let show_bet = cfg.show_bet && interior.w >= 220.0;
    let count = cfg.count.min(rows_that_fit(interior.h, row_height(font))).max(1);

    let rows = pending
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, e)| {
            let mut cells = vec![
                Visual::Text(Label::new(format!("{}", i + 1), font * 0.85, MUTED)),
                Visual::Text(Label::new(e.game_name.clone(), font, TEXT)),
            ];
            if show_bet {
                cells.push(Visual::Text(Label::new(format_currency(e.bet_size), font, MUTED)));
            }
            Visual::Row { gap: font * 0.5, children: cells }
        })
        .collect();
    Visual::Column { gap: ROW_GAP_PX, children: rows }
}

fn recent_results(
    cfg: &RecentResultsConfig,
    interior: Box2,
    scale: f64,
    live: &LiveData<'_>,
) -> Visual {
    let Some(hunt) = live.hunt else {
        return placeholder("Recent Results");
    };
    let completed = hunt.completed();
    if completed.is_empty() {
        return placeholder("Recent Results");
    }

    let font = scaled_font(cfg.font_size, scale);
    let show_multiplier = cfg.show_multiplier && interior.w >= 220.0;
    let count = cfg.count.min(rows_that_fit(interior.h, row_height(font))).max(1);

    let rows = completed
        .iter()
        .rev()
        .take(count)
        .map(|e| {
            let mut cells = vec![Visual::Text(Label::new(e.game_name.clone(), font, TEXT))];
            cells.push(Visual::Text(Label::new(
                format_currency(e.result.unwrap_or(0.0)),
                font,
                if e.is_win() { WIN } else { LOSS },
            )));
            if show_multiplier {
                if let Some(m) = e.multiplier {
                    cells.push(Visual::Text(Label::new(format_multiplier(m), font, GOLD)));
                }
            }
            Visual::Row { gap: font * 0.5, children: cells }
        })
        .collect();
    Visual::Column { gap: ROW_GAP_PX, children: rows }
}

fn leaderboard(cfg: &LeaderboardConfig, interior: Box2, scale: f64, live: &LiveData<'_>) -> Visual {
    let Some(hunt) = live.hunt else {
        return placeholder("Top Wins");
    };
    let mut ranked: Vec<_> = hunt
        .completed()
        .into_iter()
        .filter(|e| e.multiplier.is_some())
        .collect();
    if ranked.is_empty() {
        return placeholder("Top Wins");
    }
    ranked.sort_by(|a, b| {
        b.multiplier
            .unwrap_or(0.0)
            .partial_cmp(&a.multiplier.unwrap_or(0.0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let font = scaled_font(cfg.font_size, scale);
    let count = cfg.count.min(rows_that_fit(interior.h, row_height(font))).max(1);

    let rows = ranked
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, e)| {
            let rank_color = if i == 0 { GOLD } else { MUTED };
            Visual::Row {
                gap: font * 0.5,
                children: vec![
                    Visual::Text(Label::new(format!("#{}", i + 1), font, rank_color).bold()),
                    Visual::Text(Label::new(e.game_name.clone(), font, TEXT)),
                    Visual::Text(
                        Label::new(format_multiplier(e.multiplier.unwrap_or(0.0)), font, GOLD)
                            .bold(),
                    ),
                ],
            }
        })
        .collect();
    Visual::Column { gap: ROW_GAP_PX, children: rows }
}

// =============================================================
// Static kinds
// =============================================================

fn custom_text(cfg: &CustomTextConfig, scale: f64) -> Visual {
    Visual::Text(Label {
        text: cfg.text.clone(),
        font_size: scaled_font(cfg.font_size, scale),
        color: cfg.color.clone(),
        bold: cfg.font_weight == FontWeight::Bold,
        align: cfg.align,
    })
}

fn image(cfg: &ImageConfig) -> Visual {
    if cfg.url.is_empty() {
        return placeholder("Image (set URL)");
    }
    Visual::Picture { url: cfg.url.clone(), fit: cfg.fit }
}

fn timer(cfg: &TimerConfig, scale: f64) -> Visual {
    Visual::Clock {
        mode: cfg.mode,
        label: Label::new(format_clock(0), scaled_font(cfg.font_size, scale), &cfg.color)
            .bold()
            .align(TextAlign::Center),
    }
}

fn game_image(cfg: &GameImageConfig, interior: Box2, scale: f64, live: &LiveData<'_>) -> Visual {
    let image = live
        .current_game
        .and_then(|cg| cg.game_image.as_deref())
        .or_else(|| {
            live.hunt
                .and_then(HuntSummary::current_entry)
                .and_then(|e| e.game_image.as_deref())
        });
    let Some(url) = image else {
        return placeholder("Game Image");
    };
    let picture = Visual::Picture { url: url.to_owned(), fit: cfg.fit };
    if cfg.show_name && interior.h >= 80.0 {
        let name = live
            .current_game
            .map(|cg| cg.game_name.clone())
            .or_else(|| live.hunt.and_then(HuntSummary::current_entry).map(|e| e.game_name.clone()))
            .unwrap_or_default();
        Visual::Column {
            gap: 4.0,
            children: vec![
                picture,
                Visual::Text(
                    Label::new(name, scaled_font(14.0, scale), TEXT).align(TextAlign::Center),
                ),
            ],
        }
    } else {
        picture
    }
}

/// Format whole seconds as `HH:MM:SS` for the host's timer tick.
#[must_use]
pub fn format_clock(total_secs: u64) -> String {
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
