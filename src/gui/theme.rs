use eframe::egui::{
    self,
    RichText,
};
use egui::{
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// App palette with a dark and a light variant; both are registered with egui
/// so the system preference picks the right one.
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Theme { dark: ThemeDetails::slate_dark(), light: ThemeDetails::slate_light() }
    }

    pub fn red(&self) -> Color32 {
        self.dark.red
    }

    pub fn green(&self) -> Color32 {
        self.dark.green
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.dark.cyan).strong()
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    red: Color32,
    green: Color32,
    orange: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    fn slate_dark() -> Self {
        Self {
            background: Color32::from_rgb(24, 24, 27),
            foreground: Color32::from_rgb(228, 228, 231),
            selection: Color32::from_rgb(63, 63, 70),
            red: Color32::from_rgb(248, 113, 113),
            green: Color32::from_rgb(74, 222, 128),
            orange: Color32::from_rgb(251, 146, 60),
            cyan: Color32::from_rgb(103, 232, 249),
            background_darker: Color32::from_rgb(9, 9, 11),
            background_dark: Color32::from_rgb(18, 18, 21),
            background_light: Color32::from_rgb(39, 39, 42),
            background_lighter: Color32::from_rgb(52, 52, 56),
        }
    }

    fn slate_light() -> Self {
        Self {
            background: Color32::from_rgb(241, 245, 249),
            foreground: Color32::from_rgb(30, 41, 59),
            selection: Color32::from_rgb(203, 213, 225),
            red: Color32::from_rgb(220, 38, 38),
            green: Color32::from_rgb(22, 163, 74),
            orange: Color32::from_rgb(234, 88, 12),
            cyan: Color32::from_rgb(8, 145, 178),
            background_darker: Color32::from_rgb(226, 232, 240),
            background_dark: Color32::from_rgb(235, 240, 246),
            background_light: Color32::from_rgb(248, 250, 252),
            background_lighter: Color32::from_rgb(255, 255, 255),
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
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
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
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.cyan, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke { color: theme.cyan, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.cyan, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.cyan,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            ..default
        },
    );
}
