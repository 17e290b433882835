use chrono::NaiveDate;
use egui::{Align2, Color32, Context, FontId, Id, LayerId, Order, Rect, Vec2};

use crate::models::event::{DropPayload, ExternalEvent};
use crate::services::widget::WidgetCommand;
use crate::utils::date::to_iso_string;

/// What is being dragged
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragSource {
    /// A chip from the external events panel
    External(ExternalEvent),
    /// An event already on the grid
    Existing {
        event_id: String,
        title: String,
        original_date: String,
    },
}

impl DragSource {
    pub fn title(&self) -> &str {
        match self {
            Self::External(chip) => &chip.title,
            Self::Existing { title, .. } => title,
        }
    }

    /// Command produced by releasing this source over `date`.
    ///
    /// Dropping an existing event back on its own day yields nothing.
    pub fn drop_command(&self, date: NaiveDate) -> Option<WidgetCommand> {
        let date = to_iso_string(date);
        match self {
            Self::External(chip) => Some(WidgetCommand::ExternalDropped(DropPayload::new(
                chip.title.clone(),
                date,
            ))),
            Self::Existing {
                event_id,
                original_date,
                ..
            } => (*original_date != date).then(|| WidgetCommand::MoveEvent {
                id: event_id.clone(),
                date,
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DragContext {
    pub source: DragSource,
    pub hovered_date: Option<NaiveDate>,
}

impl DragContext {
    pub fn new(source: DragSource) -> Self {
        Self {
            source,
            hovered_date: None,
        }
    }
}

pub struct DragManager;

impl DragManager {
    fn storage_id() -> Id {
        Id::new("calendar_widget_drag_state")
    }

    pub fn begin(ctx: &Context, context: DragContext) {
        log::debug!("Drag started: {:?}", context.source);
        ctx.memory_mut(|mem| {
            mem.data.insert_temp(Self::storage_id(), context);
        });
    }

    pub fn active(ctx: &Context) -> Option<DragContext> {
        ctx.memory(|mem| mem.data.get_temp::<DragContext>(Self::storage_id()))
    }

    pub fn is_active(ctx: &Context) -> bool {
        Self::active(ctx).is_some()
    }

    pub fn update_hover(ctx: &Context, date: NaiveDate) {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if let Some(mut state) = mem.data.get_temp::<DragContext>(id) {
                state.hovered_date = Some(date);
                mem.data.insert_temp(id, state);
            }
        });
    }

    /// Forget last frame's hovered day; cells re-report it while drawing
    pub fn clear_hover(ctx: &Context) {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if let Some(mut state) = mem.data.get_temp::<DragContext>(id) {
                state.hovered_date = None;
                mem.data.insert_temp(id, state);
            }
        });
    }

    /// Take the active drag, ending it
    pub fn finish(ctx: &Context) -> Option<DragContext> {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            let current = mem.data.get_temp::<DragContext>(id);
            if current.is_some() {
                mem.data.remove::<DragContext>(id);
            }
            current
        })
    }

    pub fn cancel(ctx: &Context) {
        ctx.memory_mut(|mem| {
            mem.data.remove::<DragContext>(Self::storage_id());
        });
    }

    /// Draw the dragged title next to the pointer
    pub fn paint_preview(ctx: &Context, background: Color32, text_color: Color32) {
        let Some(drag) = Self::active(ctx) else {
            return;
        };
        let Some(pointer) = ctx.pointer_hover_pos() else {
            return;
        };

        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        let painter = ctx.layer_painter(LayerId::new(
            Order::Tooltip,
            Id::new("calendar_widget_drag_preview"),
        ));
        let galley = painter.layout_no_wrap(
            drag.source.title().to_string(),
            FontId::proportional(12.0),
            text_color,
        );
        let origin = pointer + Vec2::new(14.0, -8.0);
        let rect = Rect::from_min_size(origin, galley.size()).expand2(Vec2::new(6.0, 3.0));
        painter.rect_filled(rect, 4.0, background.gamma_multiply(0.9));
        painter.galley(origin, galley, text_color);

        if drag.hovered_date.is_none() {
            painter.text(
                rect.right_bottom() + Vec2::new(4.0, 0.0),
                Align2::LEFT_BOTTOM,
                "⊘",
                FontId::proportional(11.0),
                text_color.gamma_multiply(0.6),
            );
        }
    }
}
