use chrono::NaiveDate;
use egui::{Context, Id, Pos2, Rect, Vec2};

use crate::models::event::{Event, EventId};

/// An event chip being dragged between day cells.
#[derive(Clone, Debug, PartialEq)]
pub struct DragContext {
    pub event_id: EventId,
    /// Chip text, repainted under the pointer while dragging
    pub label: String,
    pub source_date: NaiveDate,
    /// Position within the source day's bucket at drag start
    pub source_index: usize,
    pub pointer_offset: Vec2,
    pub pointer_pos: Option<Pos2>,
    pub hovered_date: Option<NaiveDate>,
    pub hovered_rect: Option<Rect>,
}

impl DragContext {
    pub fn from_event(event: &Event, source_index: usize, pointer_offset: Vec2) -> Self {
        Self {
            event_id: event.id,
            label: event.label(),
            source_date: event.date,
            source_index,
            pointer_offset,
            pointer_pos: None,
            hovered_date: Some(event.date),
            hovered_rect: None,
        }
    }

    /// Day the event would land on if released now; `None` over its own day
    /// or outside the grid.
    pub fn drop_target(&self) -> Option<NaiveDate> {
        self.hovered_date.filter(|date| *date != self.source_date)
    }
}

/// Keeps the active drag in egui's frame-to-frame memory.
pub struct DragManager;

impl DragManager {
    fn storage_id() -> Id {
        Id::new("calendar_event_drag_state")
    }

    pub fn begin(ctx: &Context, context: DragContext) {
        log::debug!(
            "Drag started for event {} from {}",
            context.event_id,
            context.source_date
        );
        ctx.data_mut(|data| data.insert_temp(Self::storage_id(), context));
    }

    pub fn active(ctx: &Context) -> Option<DragContext> {
        ctx.data(|data| data.get_temp::<DragContext>(Self::storage_id()))
    }

    pub fn is_active(ctx: &Context) -> bool {
        Self::active(ctx).is_some()
    }

    pub fn update_hover(ctx: &Context, date: NaiveDate, rect: Rect, pointer_pos: Pos2) {
        let id = Self::storage_id();
        ctx.data_mut(|data| {
            if let Some(mut state) = data.get_temp::<DragContext>(id) {
                state.hovered_date = Some(date);
                state.hovered_rect = Some(rect);
                state.pointer_pos = Some(pointer_pos);
                data.insert_temp(id, state);
            }
        });
    }

    /// Pointer left every day cell
    pub fn clear_hover(ctx: &Context) {
        let id = Self::storage_id();
        ctx.data_mut(|data| {
            if let Some(mut state) = data.get_temp::<DragContext>(id) {
                state.hovered_date = None;
                state.hovered_rect = None;
                data.insert_temp(id, state);
            }
        });
    }

    pub fn finish(ctx: &Context) -> Option<DragContext> {
        let id = Self::storage_id();
        ctx.data_mut(|data| {
            let current = data.get_temp::<DragContext>(id);
            if current.is_some() {
                data.remove::<DragContext>(id);
            }
            current
        })
    }

    pub fn cancel(ctx: &Context) {
        ctx.data_mut(|data| data.remove::<DragContext>(Self::storage_id()));
    }
}
