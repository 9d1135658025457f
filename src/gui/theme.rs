use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// Paired dark/light palettes registered as egui theme variants, so the
/// global theme switch flips between them.
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::washi()
    }
}

impl Theme {
    /// Paper-and-ink palette: warm off-white by day, lamp-lit indigo at night.
    pub fn washi() -> Self {
        Theme { dark: ThemeDetails::night_reading(), light: ThemeDetails::washi_paper() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).plum).strong()
    }

    pub fn strong(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).amber)
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).muted)
    }

    pub fn amber(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).amber
    }

    pub fn indigo(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).indigo
    }

    pub fn moss(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).moss
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).surface
    }

    pub fn card_stroke(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).line
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    background_dim: Color32,
    background_faint: Color32,
    surface: Color32,
    line: Color32,
    foreground: Color32,
    muted: Color32,
    selection: Color32,
    amber: Color32,
    indigo: Color32,
    moss: Color32,
    plum: Color32,
    red: Color32,
}

impl ThemeDetails {
    fn washi_paper() -> Self {
        Self {
            background: Color32::from_rgb(0xf9, 0xf6, 0xef),
            background_dim: Color32::from_rgb(0xf3, 0xed, 0xe2),
            background_faint: Color32::from_rgb(0xec, 0xe5, 0xd8),
            surface: Color32::from_rgb(0xff, 0xff, 0xfb),
            line: Color32::from_rgb(0xd1, 0xb5, 0x8f),
            foreground: Color32::from_rgb(0x33, 0x2e, 0x27),
            muted: Color32::from_rgb(0x8a, 0x81, 0x72),
            selection: Color32::from_rgb(0xf0, 0xdf, 0xc0),
            amber: Color32::from_rgb(0xc2, 0x7b, 0x1f),
            indigo: Color32::from_rgb(0x3a, 0x5a, 0x9b),
            moss: Color32::from_rgb(0x4a, 0x7c, 0x3f),
            plum: Color32::from_rgb(0x7d, 0x4a, 0x78),
            red: Color32::from_rgb(0xb4, 0x3e, 0x3e),
        }
    }

    fn night_reading() -> Self {
        Self {
            background: Color32::from_rgb(0x20, 0x22, 0x2b),
            background_dim: Color32::from_rgb(0x1a, 0x1c, 0x24),
            background_faint: Color32::from_rgb(0x16, 0x18, 0x1f),
            surface: Color32::from_rgb(0x2a, 0x2d, 0x39),
            line: Color32::from_rgb(0x4d, 0x46, 0x3a),
            foreground: Color32::from_rgb(0xe8, 0xe3, 0xd6),
            muted: Color32::from_rgb(0x9a, 0x94, 0x86),
            selection: Color32::from_rgb(0x41, 0x3c, 0x30),
            amber: Color32::from_rgb(0xe0, 0xa4, 0x58),
            indigo: Color32::from_rgb(0x8f, 0xad, 0xe8),
            moss: Color32::from_rgb(0x8f, 0xc4, 0x7f),
            plum: Color32::from_rgb(0xc9, 0x9a, 0xc4),
            red: Color32::from_rgb(0xe0, 0x6c, 0x6c),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_dim,
                    bg_stroke: Stroke {
                        color: theme.background_dim,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.surface,
                    weak_bg_fill: theme.background_dim,
                    bg_stroke: Stroke {
                        color: theme.line,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_dim,
                    bg_stroke: Stroke { color: theme.amber, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke { color: theme.amber, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dim,
                    weak_bg_fill: theme.background_dim,
                    bg_stroke: Stroke { color: theme.plum, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.indigo,
            faint_bg_color: theme.background_faint,
            extreme_bg_color: theme.background_faint,
            code_bg_color: theme.background_dim,
            error_fg_color: theme.red,
            warn_fg_color: theme.amber,
            window_shadow: Shadow { color: theme.background_faint, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.line, ..default.window_stroke },
            panel_fill: theme.background,
            popup_shadow: Shadow { color: theme.background_dim, ..default.popup_shadow },
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
    });
}
