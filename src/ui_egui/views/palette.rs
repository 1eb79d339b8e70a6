use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub other_month_bg: Color32,
    pub today_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub other_month_text: Color32,
    pub hover_border: Color32,
    pub drop_fill: Color32,
    pub drop_border: Color32,
    pub event_bg: Color32,
    /// Chips on days holding more than one event
    pub overlap_event_bg: Color32,
    pub event_text: Color32,
    pub overflow_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            other_month_bg: theme.other_month_background,
            today_bg: theme.today_background,
            border: theme.day_border,
            today_border: theme.today_border,
            text: theme.text_primary,
            other_month_text: theme.text_secondary,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
            drop_fill: Color32::from_rgba_unmultiplied(120, 200, 120, 35),
            drop_border: Color32::from_rgb(120, 200, 120),
            event_bg: theme.event_background,
            overlap_event_bg: blend(theme.event_background, theme.today_border, 0.35),
            event_text: theme.event_text,
            overflow_text: theme.text_secondary,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct DayStripPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub strip_border: Color32,
}

impl DayStripPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            header_bg: theme.header_background,
            header_text: theme.header_text,
            strip_border: theme.day_border,
        }
    }
}
